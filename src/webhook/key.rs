//! Webhook key resolution.

use std::fmt;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::KeyError;

/// The secret key authorizing calls to the Maker Webhooks service.
///
/// `Debug` output is redacted so the key cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a literal key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Resolves a key argument into a [`Credential`].
///
/// If `input` names an existing regular file, the key is the first line of
/// that file. A line ends at `\n`, `\r\n` or a lone `\r`, and anything after
/// it is ignored. Otherwise `input` itself is the key.
///
/// # Errors
///
/// Returns [`KeyError::FileRead`] if the file cannot be read and
/// [`KeyError::EmptyFile`] if it has no first line.
pub fn resolve_key(input: &str) -> Result<Credential, KeyError> {
    let path = Path::new(input);
    if !path.is_file() {
        return Ok(Credential::new(input));
    }

    tracing::debug!(path = %path.display(), "Reading webhook key from file");
    read_first_line(path).map(Credential::new)
}

fn read_first_line(path: &Path) -> Result<String, KeyError> {
    let read_error = |source| KeyError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(read_error)?;
    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(read_error)?;

    if read == 0 {
        return Err(KeyError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let first = line.split(['\r', '\n']).next().unwrap_or_default();
    Ok(first.to_string())
}
