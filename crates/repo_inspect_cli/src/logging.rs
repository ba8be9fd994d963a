//! Log filter selection for the binary.
//!
//! Diagnostics are silent unless `--verbose` is given. With it, the
//! `REPO_INSPECT_LOG` directive replaces the default `info` level.

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

/// Environment variable overriding the verbose log filter
pub const LOG_ENV_VAR: &str = "REPO_INSPECT_LOG";

const VERBOSE_DIRECTIVE: &str = "info";
const SILENT_DIRECTIVE: &str = "off";

/// Returns the `EnvFilter` directive for the given verbosity.
///
/// `env_directive` is the value of [`LOG_ENV_VAR`], if set. It is ignored
/// without `verbose`, and blank values fall back to `info`.
pub fn log_directive(verbose: bool, env_directive: Option<&str>) -> String {
    if !verbose {
        return SILENT_DIRECTIVE.to_string();
    }

    match env_directive.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => VERBOSE_DIRECTIVE.to_string(),
    }
}
