//! Logging setup for the binary.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging from `$RUST_LOG`. `verbose` overrides it with debug
/// output for this crate.
pub fn set_up_logging(verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_ansi(should_emit_colors())
        .with_writer(std::io::stderr)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::new("pkgroot=debug")
    } else {
        EnvFilter::builder().from_env_lossy()
    };

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::registry().with(filter_layer).with(fmt_layer).try_init();
}

fn should_emit_colors() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
