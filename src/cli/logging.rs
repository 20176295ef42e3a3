use tracing_subscriber::EnvFilter;

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or this
/// crate's debug events with `-v`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pgmt=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when used as a library.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
