use std::path::PathBuf;

/// Resolve the host's standard program-installation directory.
///
/// The launcher installs into the 32-bit Program Files folder, so that is
/// the folder resolved on Windows. Other platforms have no equivalent and
/// return `None`; callers there must supply the installation directory.
pub(crate) fn program_files_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        program_files_x86_dir()
    }

    #[cfg(not(target_os = "windows"))]
    {
        None
    }
}

#[cfg(target_os = "windows")]
fn program_files_x86_dir() -> Option<PathBuf> {
    use windows::Win32::System::Com::CoTaskMemFree;
    use windows::Win32::UI::Shell::{
        FOLDERID_ProgramFilesX86, SHGetKnownFolderPath, KF_FLAG_DEFAULT,
    };

    let pwstr =
        unsafe { SHGetKnownFolderPath(&FOLDERID_ProgramFilesX86, KF_FLAG_DEFAULT, None) }.ok()?;
    let path = unsafe { pwstr.to_string() }.ok().map(PathBuf::from);
    unsafe { CoTaskMemFree(Some(pwstr.0 as _)) };

    path
}
