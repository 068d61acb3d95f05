use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr subscriber for the binaries. `RUST_LOG` overrides the
/// default level. Records emitted through the `log` facade are forwarded too.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "lazy_paths=debug" } else { "lazy_paths=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
