/// Blocking, user-visible error reporting.
///
/// The bootstrap runs without a console when double-clicked, so failures
/// must reach the interactive user before the process exits.
pub trait Notifier {
    /// Present a blocking error notification and return once dismissed.
    fn error(&self, title: &str, message: &str);
}

/// Writes notifications to stderr. The fallback on platforms without a
/// native dialog, and the wrapper's `--console` mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

/// Modal error dialog.
#[cfg(target_os = "windows")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

#[cfg(target_os = "windows")]
impl Notifier for DialogNotifier {
    fn error(&self, title: &str, message: &str) {
        use windows::core::PCWSTR;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

        let text: Vec<u16> = message.encode_utf16().chain(Some(0)).collect();
        let caption: Vec<u16> = title.encode_utf16().chain(Some(0)).collect();

        unsafe {
            let _ = MessageBoxW(
                None,
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}

/// Dialogs where available, stderr otherwise.
pub(crate) fn default_notifier() -> Box<dyn Notifier> {
    #[cfg(target_os = "windows")]
    {
        Box::new(DialogNotifier)
    }

    #[cfg(not(target_os = "windows"))]
    {
        Box::new(ConsoleNotifier)
    }
}
