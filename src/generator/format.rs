use std::path::Path;
use std::process::Command;

use tracing::warn;

/// Environment variable overriding the `rustfmt` binary
pub const RUSTFMT_ENV: &str = "APIGEN_RUSTFMT";

/// Run `rustfmt` over a generated file
///
/// Formatting is cosmetic: a missing or failing formatter is logged and the
/// unformatted file is kept.
pub fn format_output(path: &Path) -> bool {
    let rustfmt = std::env::var(RUSTFMT_ENV).unwrap_or_else(|_| "rustfmt".to_string());
    match Command::new(&rustfmt).arg("--edition").arg("2021").arg(path).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!(path = %path.display(), %status, "rustfmt failed; output left unformatted");
            false
        }
        Err(err) => {
            warn!(rustfmt = %rustfmt, error = %err, "could not run rustfmt; output left unformatted");
            false
        }
    }
}
