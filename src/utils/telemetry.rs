use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ecommerce_helper=info";
const VERBOSE_FILTER: &str = "ecommerce_helper=debug";
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("invalid tracing filter directive `{directive}`: {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a stderr subscriber so log lines never mix with chat replies.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at info, or debug
/// when `verbose` is set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) -> Result<(), TelemetryInitError> {
    if TRACING_INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = resolve_filter(verbose)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    let _ = TRACING_INITIALIZED.set(());
    Ok(())
}

fn resolve_filter(verbose: bool) -> Result<EnvFilter, TelemetryInitError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_new(directive).map_err(|source| TelemetryInitError::InvalidFilter {
        directive: directive.to_string(),
        source,
    })
}
