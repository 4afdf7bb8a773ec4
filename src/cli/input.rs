/// Reading markup from a file or standard input.
use std::io::Read;
use std::path::Path;

use super::errors::CliError;

/// Read the whole source: the file at `path`, or stdin when `path` is absent or `-`.
///
/// # Errors
///
/// Returns `CliError::Read` or `CliError::Stdin` when the source can't be read as UTF-8.
pub fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => {
            tracing::debug!(path = %p.display(), "reading markup file");
            std::fs::read_to_string(p).map_err(|source| CliError::Read {
                path: p.to_path_buf(),
                source,
            })
        }
        _ => {
            tracing::debug!("reading markup from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Remove one trailing line terminator so files ending in `\n` don't gain a blank line.
#[must_use]
pub fn chomp(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
