use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("scribble=debug");
    }
    std::env::var("SCRIBBLE_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| "scribble=warn".into())
}

/// Installs the stderr subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
    });
}
