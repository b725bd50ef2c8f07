use std::path::PathBuf;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Error type for `installer-bootstrap`.
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    /// The host could not supply its standard program-installation directory.
    #[error("failed to resolve the program files directory")]
    EnvironmentLookup,

    /// The launcher installation has no `runtime` directory.
    #[error("runtime directory not found: {}", .path.display())]
    RuntimeDirMissing {
        /// Composed `<install>/runtime` path that was probed.
        path: PathBuf,
    },

    /// No candidate directory held a Java launcher executable.
    #[error("no bundled java runtime found under: {}", .runtime_dir.display())]
    RuntimeNotFound {
        /// Runtime directory whose candidates were exhausted.
        runtime_dir: PathBuf,
    },

    /// The payload file could not be created or written.
    #[error("failed to stage installer payload at {}", .path.display())]
    Staging {
        /// Target path of the staged payload.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The installer process could not be spawned or awaited.
    #[error("failed to run the installer process: {message}")]
    Spawn {
        /// Human-readable message.
        message: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// True for the discovery failures that mean "no usable Java runtime".
    pub fn is_discovery(&self) -> bool {
        matches!(
            self,
            BootstrapError::EnvironmentLookup
                | BootstrapError::RuntimeDirMissing { .. }
                | BootstrapError::RuntimeNotFound { .. }
        )
    }
}
