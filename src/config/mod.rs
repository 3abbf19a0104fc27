mod folder;
pub mod log;
mod server;

use figment::providers::{Env, Serialized};
use figment::Figment;
pub use folder::Folder;
pub use log::Log;
use serde::Deserialize;
pub use server::Server;

use crate::constant;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub folder: Folder,
    pub log: Log,
}

impl Config {
    fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed(const_format::concatcp!(constant::SERVER_NAME, "_")).split("__"))
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("folder", Folder::default()))
            .join(Serialized::default("log", Log::default()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::figment().extract().expect("Could not parse config")
    }
}
