use crate::error::{BootstrapError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A spawn-ready command description (testable without executing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments passed to the executable.
    pub args: Vec<OsString>,
    /// Working directory for the spawned process.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Command running a jar with the given Java launcher:
    /// `<java> -jar <jar>`.
    pub fn java_jar(java_binary: impl Into<PathBuf>, jar: impl AsRef<Path>) -> Self {
        Self {
            program: java_binary.into(),
            args: vec![
                OsString::from("-jar"),
                jar.as_ref().as_os_str().to_os_string(),
            ],
            cwd: None,
        }
    }

    /// Spawn the described process.
    pub fn spawn(&self) -> Result<std::process::Child> {
        let mut cmd = std::process::Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.spawn().map_err(|e| BootstrapError::Spawn {
            message: format!("{e}"),
        })
    }

    /// Spawn and block until the process exits, returning its exit code.
    ///
    /// The wait is unbounded. A child that terminates without reporting a
    /// code (signalled on Unix) maps to an error rather than a fabricated
    /// code.
    pub fn run(&self) -> Result<i32> {
        let status = self.spawn()?.wait().map_err(|e| BootstrapError::Spawn {
            message: format!("{e}"),
        })?;

        status.code().ok_or_else(|| BootstrapError::Spawn {
            message: "installer process terminated without an exit code".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_jar_builds_run_as_jar_invocation() {
        let spec = CommandSpec::java_jar("/opt/jre/bin/java", "installer.jar");
        assert_eq!(spec.program, PathBuf::from("/opt/jre/bin/java"));
        assert_eq!(spec.args, vec!["-jar", "installer.jar"]);
        assert_eq!(spec.cwd, None);
    }

    #[test]
    fn spawn_failure_maps_to_spawn_error() {
        let spec = CommandSpec::java_jar("/nonexistent/bin/java", "installer.jar");
        let err = spec.run().unwrap_err();
        assert!(matches!(err, BootstrapError::Spawn { .. }));
    }
}
