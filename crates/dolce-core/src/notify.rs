//! Local-notification scheduling seam.
//!
//! The engine never talks to an OS notification API directly; it calls
//! through this trait once per unlock. Delivery is best-effort and
//! failures are swallowed by the caller.

use std::time::Duration;

use crate::error::Result;

/// External notification scheduler consumed by the engine.
pub trait Notifier {
    /// Schedule a local notification after `delay`.
    fn schedule(&self, title: &str, body: &str, delay: Duration) -> Result<()>;
}

/// Discards all notifications. Default for headless use and tests.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn schedule(&self, _title: &str, _body: &str, _delay: Duration) -> Result<()> {
        Ok(())
    }
}

/// Prints notifications to stderr. Used by the CLI.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn schedule(&self, title: &str, body: &str, _delay: Duration) -> Result<()> {
        eprintln!("🔔 {title}: {body}");
        Ok(())
    }
}
