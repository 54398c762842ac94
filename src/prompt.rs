//! User-facing blocking interactions: notifications and yes/no confirmation.
//!
//! Screens and the session store only see the traits, so tests drive them
//! with scripted implementations.

use std::io::Write;

/// Blocking, dismissible notification
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Explicit yes/no step guarding destructive actions
pub trait Confirm: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// Writes notifications to stderr. With `wait` set, the notification blocks
/// until the user dismisses it with Enter.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier {
    wait: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self { wait: false }
    }

    pub fn blocking() -> Self {
        Self { wait: true }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("! {}", message);

        if self.wait {
            eprint!("  (press Enter to dismiss)");
            let _ = std::io::stderr().flush();
            let mut line = String::new();
            if let Err(e) = std::io::stdin().read_line(&mut line) {
                tracing::debug!("Notification dismissed without input: {}", e);
            }
        }
    }
}

/// Interactive confirmation through `inquire`. Any prompt failure
/// (no terminal, Ctrl-C, Esc) counts as "no".
#[derive(Debug, Clone, Default)]
pub struct InquireConfirm;

impl Confirm for InquireConfirm {
    fn confirm(&self, question: &str) -> bool {
        match inquire::Confirm::new(question).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!("Confirmation prompt aborted: {}", e);
                false
            }
        }
    }
}

/// Pre-answered confirmation, for `--yes`
#[derive(Debug, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, question: &str) -> bool {
        tracing::debug!("Auto-confirmed: {}", question);
        true
    }
}
