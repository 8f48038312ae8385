use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt::MakeWriter;
use crate::core::domain::Configuration;

pub(crate) fn build_subscriber<W>(config: &Configuration, writer: W) -> Box<dyn Subscriber + Send + Sync>
    where W: for<'w> MakeWriter<'w> + Send + Sync + 'static {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.max_log_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);
    if config.json_logs {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    }
}

// Logs go to stderr so they never interleave with the menu on stdout.
pub fn setup_tracing(config: &Configuration) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(build_subscriber(config, std::io::stderr))
}
