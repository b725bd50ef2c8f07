use crate::error::{BootstrapError, Result};
use crate::platform;
use crate::runtime::JavaRuntime;
use std::path::PathBuf;

/// Environment variable overriding the launcher installation directory.
pub const INSTALL_DIR_ENV: &str = "LAUNCHER_INSTALL_DIR";

/// Directory the launcher installs under inside Program Files.
const PRODUCT_DIR_NAME: &str = "Minecraft";

#[cfg(target_os = "windows")]
const PLATFORM_ARCH: &str = "windows-x64";
#[cfg(not(target_os = "windows"))]
const PLATFORM_ARCH: &str = "linux";

#[cfg(target_os = "windows")]
const JAVA_LAUNCHER_NAME: &str = "javaw.exe";
#[cfg(not(target_os = "windows"))]
const JAVA_LAUNCHER_NAME: &str = "java";

/// Ordered search strategy for a launcher-bundled Java runtime.
///
/// Candidates are probed in order under `<install>/runtime` and the first
/// directory holding a `bin/<launcher>` executable wins; later candidates
/// are never inspected. The search is not recursive and does not compare
/// Java versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSearch {
    /// Launcher installation directory. When `None`, the host's Program
    /// Files directory plus [`RuntimeSearch::product_dir_name`] is used.
    pub install_dir: Option<PathBuf>,
    /// Product directory appended to the host installation root.
    pub product_dir_name: String,
    /// Relative candidate subpaths under `<install>/runtime`, most
    /// preferred first.
    pub candidates: Vec<PathBuf>,
    /// Executable name probed under `<candidate>/bin`.
    pub launcher_name: String,
}

impl Default for RuntimeSearch {
    fn default() -> Self {
        Self {
            install_dir: None,
            product_dir_name: PRODUCT_DIR_NAME.to_string(),
            candidates: vec![
                PathBuf::from("jre-x64"),
                PathBuf::from("jre-legacy").join(PLATFORM_ARCH),
            ],
            launcher_name: JAVA_LAUNCHER_NAME.to_string(),
        }
    }
}

impl RuntimeSearch {
    /// Default search with the `LAUNCHER_INSTALL_DIR` override applied when
    /// it points at an existing directory.
    pub fn from_host() -> Self {
        let mut search = Self::default();

        if let Some(dir) = std::env::var_os(INSTALL_DIR_ENV).map(PathBuf::from) {
            if dir.is_dir() {
                search.install_dir = Some(dir);
            }
        }

        search
    }

    /// Set an explicit installation directory (skips the host lookup).
    pub fn install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    fn resolve_install_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.install_dir {
            return Ok(dir.clone());
        }

        platform::program_files_dir()
            .map(|p| p.join(&self.product_dir_name))
            .ok_or(BootstrapError::EnvironmentLookup)
    }
}

/// Locate the first valid launcher-bundled Java runtime.
///
/// Read-only: performs existence probes only, no filesystem writes and no
/// process spawns.
pub fn locate_runtime(search: &RuntimeSearch) -> Result<JavaRuntime> {
    let install_dir = search.resolve_install_dir()?;
    let runtime_dir = install_dir.join("runtime");

    if !runtime_dir.is_dir() {
        return Err(BootstrapError::RuntimeDirMissing { path: runtime_dir });
    }

    for candidate in &search.candidates {
        let dir = runtime_dir.join(candidate);
        if !dir.is_dir() {
            tracing::debug!(candidate = %dir.display(), "candidate runtime directory absent, skipping");
            continue;
        }

        if let Some(runtime) = JavaRuntime::at(dir, &search.launcher_name) {
            tracing::info!(java = %runtime.java_binary().display(), "located bundled java runtime");
            return Ok(runtime);
        }
    }

    Err(BootstrapError::RuntimeNotFound { runtime_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn install_dir_override_skips_host_lookup() {
        let d = tempdir().unwrap();
        fs::create_dir_all(d.path().join("runtime/jre-x64/bin")).unwrap();
        fs::write(d.path().join("runtime/jre-x64/bin/javaw.exe"), b"").unwrap();

        let search = RuntimeSearch {
            launcher_name: "javaw.exe".to_string(),
            ..RuntimeSearch::default()
        }
        .install_dir(d.path());

        let runtime = locate_runtime(&search).unwrap();
        assert_eq!(
            runtime.java_binary(),
            d.path().join("runtime/jre-x64/bin/javaw.exe")
        );
    }

    #[test]
    fn missing_runtime_dir_is_its_own_error() {
        let d = tempdir().unwrap();

        let search = RuntimeSearch::default().install_dir(d.path());
        let err = locate_runtime(&search).unwrap_err();
        assert!(matches!(err, BootstrapError::RuntimeDirMissing { .. }));
    }

    #[test]
    fn default_candidates_are_ordered() {
        let search = RuntimeSearch::default();
        assert_eq!(search.candidates[0], PathBuf::from("jre-x64"));
        assert!(search.candidates[1].starts_with("jre-legacy"));
    }
}
