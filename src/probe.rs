//! Host probes consumed by the installer process.
//!
//! Both probes fail open: when the underlying query cannot be completed,
//! the answer that lets the installer proceed ("launcher open", "host
//! online") is reported instead of an error. This is deliberate policy and
//! is encoded in [`launcher_open_from_lookup`] and [`online_from_query`].

/// Reports whether the game launcher process is currently running.
pub trait LauncherStatusProbe {
    fn is_launcher_open(&self) -> bool;
}

/// Reports whether the host is likely to have network connectivity.
pub trait ConnectivityProbe {
    fn is_online(&self) -> bool;
}

/// Launcher probe backed by the launcher's named mutex.
///
/// The launcher holds a mutex with a well-known name for its whole
/// lifetime; opening it tells us the process is up. Only a definitive
/// "no such object" answer reports the launcher closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostLauncherProbe;

impl LauncherStatusProbe for HostLauncherProbe {
    fn is_launcher_open(&self) -> bool {
        launcher_open_from_lookup(launcher_mutex_lookup())
    }
}

/// Connectivity probe backed by the host's network list manager service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostConnectivityProbe;

impl ConnectivityProbe for HostConnectivityProbe {
    fn is_online(&self) -> bool {
        online_from_query(query_connectivity())
    }
}

/// Policy: the launcher is reported closed only on a definitive
/// `Ok(false)` ("no such object") answer; a failed lookup reports it open.
pub(crate) fn launcher_open_from_lookup<E>(lookup: Result<bool, E>) -> bool {
    lookup.unwrap_or(true)
}

/// Policy: a failed connectivity query reports online; offline is only
/// reported when the service answers with no connectivity at all.
pub(crate) fn online_from_query<E>(query: Result<bool, E>) -> bool {
    query.unwrap_or(true)
}

/// `Ok(true)` = mutex opened, `Ok(false)` = no such object, `Err` = the
/// lookup itself failed.
#[cfg(target_os = "windows")]
fn launcher_mutex_lookup() -> Result<bool, windows::core::Error> {
    use windows::core::w;
    use windows::Win32::Foundation::{CloseHandle, ERROR_FILE_NOT_FOUND};
    use windows::Win32::System::Threading::OpenMutexW;

    // Zero access rights are enough to learn whether the object exists.
    match unsafe { OpenMutexW(0, false, w!("MojangLauncher")) } {
        Ok(handle) => {
            unsafe {
                let _ = CloseHandle(handle);
            }
            Ok(true)
        }
        Err(err) if err.code() == ERROR_FILE_NOT_FOUND.to_hresult() => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(not(target_os = "windows"))]
fn launcher_mutex_lookup() -> Result<bool, std::io::Error> {
    // The launcher only publishes its mutex on Windows.
    Ok(false)
}

#[cfg(target_os = "windows")]
fn query_connectivity() -> Result<bool, windows::core::Error> {
    use windows::Win32::Networking::NetworkListManager::{
        INetworkListManager, NetworkListManager, NLM_CONNECTIVITY_DISCONNECTED,
    };
    use windows::Win32::System::Com::{
        CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_ALL, COINIT_APARTMENTTHREADED,
    };

    unsafe {
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;
        let query = (|| {
            let manager: INetworkListManager =
                CoCreateInstance(&NetworkListManager, None, CLSCTX_ALL)?;
            let connectivity = manager.GetConnectivity()?;
            Ok(connectivity != NLM_CONNECTIVITY_DISCONNECTED)
        })();
        CoUninitialize();
        query
    }
}

#[cfg(not(target_os = "windows"))]
fn query_connectivity() -> Result<bool, std::io::Error> {
    // No network status service to ask here; the fail-open policy applies.
    Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn launcher_reported_open_when_mutex_opened() {
        assert!(launcher_open_from_lookup::<io::Error>(Ok(true)));
    }

    #[test]
    fn launcher_reported_closed_only_on_not_found() {
        assert!(!launcher_open_from_lookup::<io::Error>(Ok(false)));
    }

    #[test]
    fn failed_mutex_lookup_reports_launcher_open() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(launcher_open_from_lookup(Err::<bool, _>(denied)));
    }

    #[test]
    fn failed_connectivity_query_reports_online() {
        let broken = io::Error::from(io::ErrorKind::Other);
        assert!(online_from_query(Err::<bool, _>(broken)));
    }

    #[test]
    fn connectivity_answer_passes_through_when_query_succeeds() {
        assert!(online_from_query::<io::Error>(Ok(true)));
        assert!(!online_from_query::<io::Error>(Ok(false)));
    }
}
