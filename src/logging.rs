use tracing_subscriber::EnvFilter;

/// Initialize tracing once at startup. `RUST_LOG` controls verbosity;
/// engine events default to warnings only so command output stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
