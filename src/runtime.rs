use std::path::{Path, PathBuf};

/// A validated, launcher-bundled Java runtime.
///
/// Validation is existence-only: the runtime directory holds a
/// `bin/<launcher>` executable. No version or architecture check is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRuntime {
    runtime_dir: PathBuf,
    java_binary: PathBuf,
}

impl JavaRuntime {
    /// Validate `dir` as a Java runtime by probing for `bin/<launcher_name>`.
    ///
    /// Returns `None` when the launcher executable is absent.
    pub fn at(dir: impl Into<PathBuf>, launcher_name: &str) -> Option<Self> {
        let runtime_dir = dir.into();
        let java_binary = runtime_dir.join("bin").join(launcher_name);
        if !java_binary.is_file() {
            return None;
        }

        Some(Self {
            runtime_dir,
            java_binary,
        })
    }

    /// Runtime directory (the matched candidate).
    pub fn runtime_dir(&self) -> &Path {
        &self.runtime_dir
    }

    /// Java launcher executable path.
    pub fn java_binary(&self) -> &Path {
        &self.java_binary
    }
}
