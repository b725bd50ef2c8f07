//! C-ABI exports for the separate installer process.
//!
//! The installer runs in a foreign runtime and reaches the host probes
//! through this library loaded at run time, so the surface is two flat
//! functions returning `0`/`1`.

use crate::probe::{
    ConnectivityProbe, HostConnectivityProbe, HostLauncherProbe, LauncherStatusProbe,
};

/// Returns `1` when the game launcher process is currently running.
#[no_mangle]
pub extern "C" fn installer_is_launcher_open() -> u8 {
    u8::from(HostLauncherProbe.is_launcher_open())
}

/// Returns `1` when the host likely has network connectivity.
///
/// Inconclusive queries report online; see [`crate::probe`].
#[no_mangle]
pub extern "C" fn installer_is_online() -> u8 {
    u8::from(HostConnectivityProbe.is_online())
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;

    #[test]
    fn exports_report_documented_defaults_off_windows() {
        assert_eq!(installer_is_launcher_open(), 0);
        assert_eq!(installer_is_online(), 1);
    }
}
