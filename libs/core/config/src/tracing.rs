use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Where log lines are written.
///
/// Interactive binaries log to stderr so stdout carries only their own output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
}

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`): JSON lines, module targets hidden,
///   `info` by default.
/// - **Development** (default): pretty-printed, `debug` by default.
///
/// `RUST_LOG` overrides the default filter in both modes. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_tracing(environment: &Environment) {
    init_tracing_to(environment, LogOutput::Stdout, None);
}

/// Same as [`init_tracing`] but with an explicit log destination and an
/// optional filter used when `RUST_LOG` is unset.
pub fn init_tracing_to(environment: &Environment, output: LogOutput, fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match fallback {
        Some(directives) => EnvFilter::new(directives),
        None => default_filter(environment),
    });

    let result = match output {
        LogOutput::Stdout => try_init(environment, filter, std::io::stdout),
        LogOutput::Stderr => try_init(environment, filter, std::io::stderr),
    };

    match result {
        Ok(()) => {
            info!(
                "Tracing initialized with ErrorLayer. Environment: {:?}",
                environment
            );
        }
        Err(_) => {
            // Already initialized, common in tests
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

fn default_filter(environment: &Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("info,tower_http=info")
    } else {
        EnvFilter::new("debug,tower_http=debug")
    }
}

fn try_init<W>(environment: &Environment, filter: EnvFilter, writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(writer),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(writer)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    }
}
