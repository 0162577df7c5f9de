//! Ctrl-C handling
//!
//! While a prompt is reading keys, the terminal is in raw mode and the
//! prompt library raises SIGINT itself before failing the read with
//! `Interrupted`. Catching the signal keeps the process alive so that read
//! error can end the run as a user abort. The launched scaffolding tool is
//! unaffected: handlers do not survive `exec`, so the child still gets the
//! default SIGINT behavior while the parent waits for it.

use crate::error::{Result, ScaffoldError};
use console::Term;
use tracing::debug;

/// Install the process-wide Ctrl-C handler
///
/// # Errors
///
/// [`ScaffoldError::Interrupt`] when a handler is already installed or the
/// platform refuses it.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        // The prompt hides the cursor and never gets to show it again.
        let _ = Term::stderr().show_cursor();
        debug!("Interrupt received");
    })
    .map_err(|source| ScaffoldError::Interrupt { source })
}

/// Make the cursor visible again after a prompt was cut short
pub fn restore_cursor() {
    let _ = Term::stderr().show_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_installs_once() {
        install_interrupt_handler().unwrap();

        let err = install_interrupt_handler().unwrap_err();
        assert!(matches!(err, ScaffoldError::Interrupt { .. }));
    }
}
