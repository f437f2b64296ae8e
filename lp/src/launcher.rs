//! Opening a tool's destination

use thiserror::Error;
use tracing::info;

use crate::domain::Tool;

/// Errors from opening a URL
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can open a URL for the user
pub trait Launcher {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Opens URLs in the system's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        open::that(url).map_err(|source| LaunchError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Open a tool's URL with `launcher`
pub fn open_tool<L: Launcher + ?Sized>(launcher: &L, tool: &Tool) -> Result<(), LaunchError> {
    info!(id = %tool.id, url = %tool.url, "Opening tool");
    launcher.open(&tool.url)
}
