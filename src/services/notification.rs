//! Notification service implementation
//!
//! User-facing success/error messages, confirmations and prompts go through a
//! [`Notifier`]. Inside Telegram the host platform's native dialogs are used;
//! elsewhere a plain console fallback stands in for the browser's
//! `alert`/`confirm`/`prompt`.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};
use super::host::HostPlatform;

/// Capability for showing messages to the user
pub trait Notifier: Send + Sync {
    fn show_success(&self, message: &str);

    fn show_error(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;

    /// `None` when the user cancels
    fn prompt(&self, message: &str) -> Option<String>;
}

/// Routes every message through the host platform's dialogs
pub struct HostNotifier {
    host: Arc<dyn HostPlatform>,
}

impl HostNotifier {
    pub fn new(host: Arc<dyn HostPlatform>) -> Self {
        Self { host }
    }
}

impl Notifier for HostNotifier {
    fn show_success(&self, message: &str) {
        self.host.show_alert(message);
    }

    fn show_error(&self, message: &str) {
        self.host.show_alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.host.show_confirm(message)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.host.show_prompt(message)
    }
}

/// Fallback used outside the host: messages are written to `output`,
/// answers are read line by line from `input`
///
/// Meant for the console binary, where `input` is the terminal.
pub struct ConsoleNotifier {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Console notifier bound to the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(
            Box::new(std::io::BufReader::new(std::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }

    fn write_line(&self, line: &str) {
        let Ok(mut output) = self.output.lock() else {
            warn!("Console output lock poisoned");
            return;
        };
        if let Err(e) = writeln!(output, "{}", line).and_then(|_| output.flush()) {
            warn!(error = %e, "Failed to write console message");
        }
    }

    /// Read one answer line; `None` on end of input or read failure
    ///
    /// The read blocks the calling thread. On a multi-threaded runtime the
    /// worker hands its other tasks off first.
    fn read_line(&self) -> Option<String> {
        let read = || {
            let mut input = self.input.lock().ok()?;
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(e) => {
                    warn!(error = %e, "Failed to read console answer");
                    None
                }
            }
        };

        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(read)
            }
            _ => read(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn show_success(&self, message: &str) {
        self.write_line(message);
    }

    fn show_error(&self, message: &str) {
        self.write_line(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.write_line(&format!("{} [y/N]", message));
        self.read_line()
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"))
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.write_line(message);
        self.read_line()
    }
}

/// Pick the host notifier when a host is present, else the console fallback
pub fn select_notifier(host: Option<Arc<dyn HostPlatform>>) -> Arc<dyn Notifier> {
    match host {
        Some(host) => Arc::new(HostNotifier::new(host)),
        None => {
            debug!("Host platform not available, using console notifier");
            Arc::new(ConsoleNotifier::stdio())
        }
    }
}

/// Notification service used by the dispatchers
#[derive(Clone)]
pub struct NotificationService {
    notifier: Arc<dyn Notifier>,
}

impl NotificationService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn success(&self, message: &str) {
        debug!(message = message, "Showing success message");
        self.notifier.show_success(message);
    }

    pub fn error(&self, message: &str) {
        debug!(message = message, "Showing error message");
        self.notifier.show_error(message);
    }

    pub fn confirm(&self, message: &str) -> bool {
        self.notifier.confirm(message)
    }

    pub fn prompt(&self, message: &str) -> Option<String> {
        self.notifier.prompt(message)
    }
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn console(input: &str) -> (ConsoleNotifier, SharedBuf) {
        let out = SharedBuf::default();
        let notifier = ConsoleNotifier::new(
            Box::new(Cursor::new(input.as_bytes().to_vec())),
            Box::new(out.clone()),
        );
        (notifier, out)
    }

    #[test]
    fn test_console_alerts_written() {
        let (notifier, out) = console("");
        notifier.show_success("Скидка добавлена");
        notifier.show_error("Ошибка");
        assert_eq!(out.text(), "Скидка добавлена\nОшибка\n");
    }

    #[test]
    fn test_console_confirm() {
        let (notifier, _) = console("y\nn\n");
        assert!(notifier.confirm("Удалить скидку?"));
        assert!(!notifier.confirm("Удалить скидку?"));
        // end of input declines
        assert!(!notifier.confirm("Удалить скидку?"));
    }

    #[test]
    fn test_console_prompt() {
        let (notifier, _) = console("оплачено наличными\n\n");
        assert_eq!(notifier.prompt("Заметка").as_deref(), Some("оплачено наличными"));
        assert_eq!(notifier.prompt("Заметка").as_deref(), Some(""));
        assert_eq!(notifier.prompt("Заметка"), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_console_prompt_inside_multi_thread_runtime() {
        let (notifier, _) = console("да\n");
        let ticker = tokio::spawn(async { 42 });
        assert!(notifier.confirm("Удалить скидку?"));
        assert_eq!(ticker.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_console_prompt_inside_current_thread_runtime() {
        let (notifier, _) = console("оплачено\n");
        assert_eq!(notifier.prompt("Заметка").as_deref(), Some("оплачено"));
    }

    #[test]
    fn test_service_forwards_to_notifier() {
        let (notifier, out) = console("да\n");
        let service = NotificationService::new(Arc::new(notifier));
        service.success("ok");
        service.error("fail");
        assert!(service.confirm("Удалить?"));
        assert_eq!(out.text(), "ok\nfail\nУдалить? [y/N]\n");
    }
}
