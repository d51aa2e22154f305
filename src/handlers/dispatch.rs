use super::spec::HandlerSpec;
use tracing::warn;

/// One `url => handler` arm of a dispatch table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    /// Request path
    pub url: String,
    /// Generated handler method invoked for the path
    pub handler: String,
}

/// Dispatch table for one receiver type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverRoutes {
    /// Receiver type the `Service` impl is generated for
    pub receiver: String,
    /// Arms in registration order
    pub entries: Vec<DispatchEntry>,
}

/// Accumulates handler registrations per receiver during one generation run
///
/// Receivers keep the order in which they were first registered. Registering a
/// URL twice for the same receiver replaces the earlier handler in place.
#[derive(Debug, Default)]
pub struct DispatchBuilder {
    receivers: Vec<ReceiverRoutes>,
}

impl DispatchBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the route of a generated handler
    pub fn register(&mut self, spec: &HandlerSpec) {
        let entry = DispatchEntry {
            url: spec.url.clone(),
            handler: spec.generated_handler_name.clone(),
        };
        let index = match self
            .receivers
            .iter()
            .position(|r| r.receiver == spec.receiver_type)
        {
            Some(index) => index,
            None => {
                self.receivers.push(ReceiverRoutes {
                    receiver: spec.receiver_type.clone(),
                    entries: Vec::new(),
                });
                self.receivers.len() - 1
            }
        };
        let routes = &mut self.receivers[index];
        match routes.entries.iter_mut().find(|e| e.url == entry.url) {
            Some(existing) => {
                warn!(
                    receiver = %routes.receiver,
                    url = %entry.url,
                    replaced = %existing.handler,
                    handler = %entry.handler,
                    "url registered twice; the last handler wins"
                );
                *existing = entry;
            }
            None => routes.entries.push(entry),
        }
    }

    /// Number of registered routes across all receivers
    pub fn len(&self) -> usize {
        self.receivers.iter().map(|r| r.entries.len()).sum()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    /// Finish the run and hand out the per-receiver tables
    pub fn finish(self) -> Vec<ReceiverRoutes> {
        self.receivers
    }
}
