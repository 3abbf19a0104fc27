mod app;
pub mod config;
pub mod constant;
mod error;
mod filesystem;
mod route;
pub mod scan;

pub use app::{banner, build, serve};
use config::log::Format;
pub use error::Error;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;


pub fn init_tracing(config: &config::Log) -> Result<(), Error> {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            const_format::concatcp!(constant::SERVER_NAME, "=info,tower_http=info").into()
        }),
    );

    match (config.format, config.time) {
        (Format::Plain, true) => registry.with(fmt::layer()).try_init(),
        (Format::Plain, false) => registry.with(fmt::layer().without_time()).try_init(),
        (Format::Json, true) => registry.with(fmt::layer().json()).try_init(),
        (Format::Json, false) => registry.with(fmt::layer().json().without_time()).try_init(),
    }
    .map_err(color_eyre::Report::from)?;
    Ok(())
}
