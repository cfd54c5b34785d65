//! Installs the global `tracing` subscriber.

use tracing_subscriber::prelude::*;

/// Sends log events to the browser console in `hydrate` builds, to stderr
/// otherwise. Calling it more than once is harmless.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time();
    #[cfg(feature = "hydrate")]
    let fmt_layer = fmt_layer.with_writer(tracing_web::MakeWebConsoleWriter::new());
    #[cfg(not(feature = "hydrate"))]
    let fmt_layer = fmt_layer.with_writer(std::io::stderr);
    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("a tracing subscriber was already installed");
    }
}
