use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use askama::Template;
use tracing::{debug, info};

use super::emit::{emit_bind, emit_dispatch, emit_handler};
use super::format::format_output;
use super::templates::PreludeTemplate;
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::handlers::{extract_handler_spec, DispatchBuilder, HandlerSpec};
use crate::rules::{parse_rule, plan_field};
use crate::source::{Declaration, SourceDescription, SourceDiscovery, StructDecl, SynDiscovery};

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Complete module source
    pub code: String,
    /// Number of `impl Bind` blocks
    pub binds: usize,
    /// Number of generated handlers
    pub handlers: usize,
    /// Number of `impl Service` blocks
    pub services: usize,
}

fn bind_for(decl: &StructDecl, config: &GeneratorConfig) -> Result<String, GenError> {
    let mut bindings = Vec::new();
    for field in &decl.fields {
        let Some(tag) = &field.tag else {
            continue;
        };
        let rule = parse_rule(tag)?;
        bindings.push(plan_field(
            &decl.name,
            &field.name,
            &field.type_name,
            rule,
            config,
        )?);
    }
    emit_bind(&decl.name, &bindings, config)
}

/// Generate the companion module for one described source
///
/// Declarations are emitted in file order: a `Bind` impl for every struct with
/// a tagged field or used as a handler parameter type, a handler for every
/// annotated method. One `Service` impl per receiver follows at the end.
///
/// # Errors
///
/// The first [`GenError`] aborts the run; no partial module is returned.
pub fn generate(
    source: &SourceDescription,
    config: &GeneratorConfig,
    source_name: &str,
) -> Result<GeneratedModule, GenError> {
    // handler specs first, so parameter structs declared before their method
    // are known when the struct is reached
    let mut specs: HashMap<usize, HandlerSpec> = HashMap::new();
    for (index, item) in source.items.iter().enumerate() {
        if let Declaration::Method(method) = item {
            if method.is_annotated(&config.marker) {
                specs.insert(index, extract_handler_spec(method, source, config)?);
            }
        }
    }
    let param_types: HashSet<&str> = specs.values().map(|s| s.params_type.as_str()).collect();

    let mut blocks = vec![PreludeTemplate {
        source_name,
        runtime_path: &config.runtime_path,
    }
    .render()?];
    let mut binds = 0;
    let mut emitted_structs: HashSet<&str> = HashSet::new();
    let mut dispatch = DispatchBuilder::new();

    for (index, item) in source.items.iter().enumerate() {
        match item {
            Declaration::Struct(decl) => {
                let tagged = decl.fields.iter().any(|f| f.tag.is_some());
                if !tagged && !param_types.contains(decl.name.as_str()) {
                    continue;
                }
                if !emitted_structs.insert(decl.name.as_str()) {
                    debug!(struct_name = %decl.name, "struct declared twice; keeping the first");
                    continue;
                }
                blocks.push(bind_for(decl, config)?);
                binds += 1;
            }
            Declaration::Method(_) => {
                if let Some(spec) = specs.get(&index) {
                    blocks.push(emit_handler(spec, config)?);
                    dispatch.register(spec);
                }
            }
        }
    }

    let handlers = specs.len();
    let receivers = dispatch.finish();
    for routes in &receivers {
        blocks.push(emit_dispatch(routes)?);
    }

    let code = blocks.join("\n\n") + "\n";
    syn::parse_file(&code).map_err(|e| GenError::InvalidOutput {
        message: e.to_string(),
    })?;

    Ok(GeneratedModule {
        code,
        binds,
        handlers,
        services: receivers.len(),
    })
}

/// Discover declarations in `source` with `syn`, then [`generate`]
pub fn generate_source(
    source: &str,
    config: &GeneratorConfig,
    source_name: &str,
) -> Result<GeneratedModule, GenError> {
    let description = SynDiscovery.discover(source)?;
    generate(&description, config, source_name)
}

/// Read `input`, generate its companion module and persist it at `output`
///
/// The module is rendered in memory and written through a temp file in the
/// destination directory, so a failed run leaves `output` untouched.
pub fn generate_file(
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> anyhow::Result<GeneratedModule> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input source: {}", input.display()))?;
    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let module = generate_source(&source, config, &source_name)
        .with_context(|| format!("Failed to generate code for {}", input.display()))?;

    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(module.code.as_bytes())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.persist(output)
        .with_context(|| format!("Failed to persist output: {}", output.display()))?;

    if config.format_output {
        format_output(output);
    }

    info!(
        input = %input.display(),
        output = %output.display(),
        binds = module.binds,
        handlers = module.handlers,
        services = module.services,
        "generated"
    );
    Ok(module)
}
