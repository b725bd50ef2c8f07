#![doc = r#"
`installer-bootstrap` is a small library for bootstrapping a Java-based
installer from a native wrapper executable.

Core capabilities:
- Locate a Java runtime bundled with the game launcher installation
- Stage an embedded installer payload and run it with the located runtime
- Report failures to the interactive user and map them to exit codes
- Host probes (launcher running, network reachable) exported over a C ABI

Supported platforms:
- Windows (full bootstrap, dialog notifier, host probes)
- Linux (search/staging logic and console notifier; used for development)
"#]

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
compile_error!("installer-bootstrap currently supports Linux and Windows only.");

mod command;
mod error;
pub mod ffi;
mod locate;
mod notify;
mod payload;
mod platform;
mod probe;
mod runtime;

pub use crate::command::CommandSpec;
pub use crate::error::{BootstrapError, Result};
pub use crate::locate::{locate_runtime, RuntimeSearch, INSTALL_DIR_ENV};
pub use crate::notify::{ConsoleNotifier, Notifier};
pub use crate::payload::{Payload, STAGED_FILE_NAME};
pub use crate::probe::{
    ConnectivityProbe, HostConnectivityProbe, HostLauncherProbe, LauncherStatusProbe,
};
pub use crate::runtime::JavaRuntime;

#[cfg(target_os = "windows")]
pub use crate::notify::DialogNotifier;

use std::path::PathBuf;

/// Exit code returned when no usable Java runtime was found.
pub const EXIT_NO_RUNTIME: i32 = -1;

/// Exit code returned when the payload could not be staged or the
/// installer process could not be spawned.
pub const EXIT_BOOTSTRAP_FAILED: i32 = 1;

/// Title used for user-facing notifications.
pub const NOTIFY_TITLE: &str = "Installer";

/// Main entry point: configure the embedded payload and the runtime
/// search, then run locate -> stage -> execute.
pub struct Bootstrap<'a> {
    payload: Payload<'a>,
    search: RuntimeSearch,
    notifier: Box<dyn Notifier>,
    stage_dir: PathBuf,
}

impl<'a> Bootstrap<'a> {
    /// Create a bootstrap for an embedded payload with host defaults.
    pub fn new(payload: Payload<'a>) -> Self {
        Self {
            payload,
            search: RuntimeSearch::from_host(),
            notifier: notify::default_notifier(),
            stage_dir: PathBuf::from("."),
        }
    }

    /// Replace the runtime search configuration.
    pub fn search(mut self, search: RuntimeSearch) -> Self {
        self.search = search;
        self
    }

    /// Replace the notifier (dialogs on Windows, stderr otherwise).
    pub fn notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Directory the payload is staged into. Defaults to the working
    /// directory.
    pub fn stage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stage_dir = dir.into();
        self
    }

    /// Run the bootstrap to completion and return the process exit code.
    ///
    /// Every failure path is terminal: it is reported through the notifier
    /// and mapped to an exit code before returning. Discovery failures map
    /// to [`EXIT_NO_RUNTIME`]; staging and spawn failures map to
    /// [`EXIT_BOOTSTRAP_FAILED`]; otherwise the installer's own exit code
    /// is passed through unchanged. No stage is retried and no alternate
    /// runtime is tried after a failure.
    pub fn run(&self) -> i32 {
        tracing::info!("bootstrapping installer");

        let runtime = match locate_runtime(&self.search) {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::warn!("no usable java runtime: {err}");
                self.notifier
                    .error(NOTIFY_TITLE, "Failed to find a valid Java installation.");
                return EXIT_NO_RUNTIME;
            }
        };

        let staged = match self.payload.stage(&self.stage_dir) {
            Ok(staged) => staged,
            Err(err) => {
                tracing::warn!("payload staging failed: {err}");
                self.notifier
                    .error(NOTIFY_TITLE, "Failed to prepare installer files.");
                return EXIT_BOOTSTRAP_FAILED;
            }
        };

        let code = match CommandSpec::java_jar(runtime.java_binary(), &staged).run() {
            Ok(code) => code,
            Err(err) => {
                tracing::warn!("installer process failed: {err}");
                self.notifier.error(NOTIFY_TITLE, "Failed to run installer.");
                return EXIT_BOOTSTRAP_FAILED;
            }
        };

        if code != 0 {
            tracing::warn!(code, "installer exited with failure");
            self.notifier.error(NOTIFY_TITLE, "Failed to run installer.");
        } else {
            tracing::info!("installer completed");
        }

        code
    }
}

/// Convenience: run the full bootstrap for an embedded payload with host
/// defaults and return the process exit code.
pub fn bootstrap(payload: &[u8]) -> i32 {
    Bootstrap::new(Payload::new(payload)).run()
}
