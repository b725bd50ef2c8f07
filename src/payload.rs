use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed filename the payload is staged to before execution.
pub const STAGED_FILE_NAME: &str = "installer.jar";

/// An embedded installer payload: an opaque jar compiled into the wrapper
/// binary and written out verbatim before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<'a> {
    bytes: &'a [u8],
}

impl<'a> Payload<'a> {
    /// Wrap an embedded payload buffer.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when no payload was embedded.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the payload to [`STAGED_FILE_NAME`] under `dir`, overwriting
    /// any previous copy.
    ///
    /// The staged file is left behind after the run; it is the launched
    /// installer's working input, not a managed temp file.
    pub fn stage(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(STAGED_FILE_NAME);
        fs::write(&path, self.bytes).map_err(|source| BootstrapError::Staging {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = self.bytes.len(), "staged installer payload");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn stages_payload_bytes_verbatim() {
        let d = tempdir().unwrap();
        let staged = Payload::new(b"PK\x03\x04fake-jar").stage(d.path()).unwrap();

        assert_eq!(staged, d.path().join(STAGED_FILE_NAME));
        assert_eq!(fs::read(&staged).unwrap(), b"PK\x03\x04fake-jar");
    }

    #[test]
    fn restaging_overwrites_previous_copy() {
        let d = tempdir().unwrap();
        Payload::new(b"first, much longer payload")
            .stage(d.path())
            .unwrap();
        let staged = Payload::new(b"second").stage(d.path()).unwrap();

        assert_eq!(fs::read(&staged).unwrap(), b"second");
    }

    #[test]
    fn staging_into_missing_dir_fails_with_staging_error() {
        let d = tempdir().unwrap();
        let err = Payload::new(b"payload")
            .stage(&d.path().join("no-such-dir"))
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Staging { .. }));
    }
}
