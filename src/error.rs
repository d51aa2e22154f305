use std::fmt;

/// Fatal generation error.
///
/// Every variant aborts the whole run: a dispatch table with gaps is worse
/// than no output, so nothing is written when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A field tag could not be parsed
    Rule {
        /// The raw tag text
        tag: String,
        /// What was wrong with it
        reason: String,
    },
    /// A tagged field has a type outside the two supported kinds
    UnsupportedFieldType {
        /// Struct declaring the field
        struct_name: String,
        /// Field name
        field: String,
        /// Declared type as written in the source
        type_name: String,
    },
    /// A parsed rule does not make sense for the field it is attached to
    InvalidBinding {
        /// Struct declaring the field
        struct_name: String,
        /// Field name
        field: String,
        /// Why the combination was rejected
        reason: String,
    },
    /// A routing annotation could not be parsed or is incomplete
    Annotation {
        /// `Receiver::method` (or just `method` for free functions)
        method: String,
        /// Why the annotation was rejected
        reason: String,
    },
    /// An annotated method does not have the shape the handler needs
    SourceShape {
        /// `Receiver::method` (or just `method` for free functions)
        method: String,
        /// What is missing
        reason: String,
    },
    /// The input is not valid Rust
    Parse {
        /// Parser message
        message: String,
    },
    /// A template failed to render
    Render {
        /// Renderer message
        message: String,
    },
    /// The rendered output failed to re-parse
    InvalidOutput {
        /// Parser message
        message: String,
    },
}

impl GenError {
    pub(crate) fn rule(tag: &str, reason: impl Into<String>) -> Self {
        GenError::Rule {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Rule { tag, reason } => {
                write!(f, "invalid apivalidator tag '{}': {}", tag, reason)
            }
            GenError::UnsupportedFieldType {
                struct_name,
                field,
                type_name,
            } => write!(
                f,
                "field {}.{} has unsupported type '{}': only String and integer fields can be bound",
                struct_name, field, type_name
            ),
            GenError::InvalidBinding {
                struct_name,
                field,
                reason,
            } => write!(f, "field {}.{}: {}", struct_name, field, reason),
            GenError::Annotation { method, reason } => {
                write!(f, "can't parse apigen instructions on {}: {}", method, reason)
            }
            GenError::SourceShape { method, reason } => {
                write!(f, "annotated method {} {}", method, reason)
            }
            GenError::Parse { message } => write!(f, "failed to parse input source: {}", message),
            GenError::Render { message } => write!(f, "failed to render generated code: {}", message),
            GenError::InvalidOutput { message } => {
                write!(f, "generated code does not parse: {}", message)
            }
        }
    }
}

impl std::error::Error for GenError {}

impl From<askama::Error> for GenError {
    fn from(err: askama::Error) -> Self {
        GenError::Render {
            message: err.to_string(),
        }
    }
}
