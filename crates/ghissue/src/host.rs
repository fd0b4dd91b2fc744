use anyhow::{Context, Result};
use plugin_host::{HostState, MemoryHost};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Host stores backed by the state file
pub struct LocalHost {
    pub store: Arc<MemoryHost>,
    state_path: PathBuf,
}

impl LocalHost {
    pub fn open(state_path: PathBuf) -> Result<Self> {
        let state = HostState::load(&state_path).context("Failed to load host state")?;
        debug!(path = %state_path.display(), "loaded host state");

        Ok(Self {
            store: Arc::new(MemoryHost::from_state(state)),
            state_path,
        })
    }

    /// Write the stores back to the state file
    pub fn persist(&self) -> Result<()> {
        let state = self.store.snapshot()?;
        state
            .save(&self.state_path)
            .context("Failed to save host state")?;
        debug!(path = %self.state_path.display(), "saved host state");
        Ok(())
    }
}
