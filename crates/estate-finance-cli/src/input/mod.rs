pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Load a typed command input from `--input <file>` or piped stdin.
///
/// Returns `None` when neither is available so the caller can fall back to
/// individual flags.
pub fn read_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        tracing::debug!(path, "reading input file");
        return Ok(Some(file::read_json(path)?));
    }

    match stdin::read_stdin()? {
        Some(value) => {
            tracing::debug!("reading input from stdin");
            Ok(Some(serde_json::from_value(value)?))
        }
        None => Ok(None),
    }
}
