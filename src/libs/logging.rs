//! Tracing subscriber setup.
//!
//! Log output goes to stderr so it never mixes with the confirmation
//! message on stdout. The level is controlled through the standard
//! `RUST_LOG` environment variable and defaults to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
