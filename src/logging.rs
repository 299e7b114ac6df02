//! Tracing setup for hosts embedding the story catalog.
//!
//! The core itself only emits `tracing` events (registrations, rejected
//! declarations); this module gives embedding hosts and tests a one-call
//! subscriber setup. Output goes to stderr, filtered by `RUST_LOG` with a
//! quiet default.
//!
//! ```rust,ignore
//! storybook_core::logging::init();
//! tracing::info!(story_id = "examples-button--default", "story registered");
//! ```

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr subscriber. Idempotent, and a no-op when the host has
/// already installed its own global subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("storybook_core=info"));

        // try_init: tests and embedding hosts may already have a subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
