use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config;
use crate::filesystem::path;

/// The folder under which courses are scanned and videos are served.
///
/// Readers take a copy of the root at the start of their work, so a request racing with
/// [`Folder::set`] may finish against the previous root.
#[derive(Debug, Clone)]
pub struct Folder {
    root: Arc<RwLock<path::LocalBuf>>,
}

#[derive(Debug, Clone)]
pub struct App {
    pub folder: Folder,
}

impl Folder {
    pub fn new(config: &config::Folder) -> Self {
        Self { root: Arc::new(RwLock::new(config.root.as_str().into())) }
    }

    pub async fn root(&self) -> path::LocalBuf {
        self.root.read().await.clone()
    }

    pub async fn set(&self, root: path::LocalBuf) {
        *self.root.write().await = root;
    }
}

impl App {
    pub fn new(folder: &config::Folder) -> Self {
        Self { folder: Folder::new(folder) }
    }
}
