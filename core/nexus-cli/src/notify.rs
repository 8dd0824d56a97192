//! Terminal notifications for finished focus blocks.

use nexus_core::Notifier;
use std::io::Write;

/// Rings the terminal bell and prints the message to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), String> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "\x07{} {}", title, body).map_err(|e| e.to_string())?;
        stderr.flush().map_err(|e| e.to_string())
    }
}
