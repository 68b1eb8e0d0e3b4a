use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::story::graph::NodeId;

/// Snapshot of a run: where the player stands and what they carry. Node ids
/// are only meaningful against the graph the run was started with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub node: NodeId,
    pub inventory: Inventory,
}

/// Storage backend for saved runs. The menu's Load Game entry consults this;
/// where a save ends up (and in what format) is left to the backend.
pub trait SaveStore {
    /// The most recent save, if the backend has one.
    fn load(&mut self) -> Result<Option<SaveData>>;

    fn save(&mut self, data: &SaveData) -> Result<()>;
}

/// The backend shipped today: holds no saves and rejects writes.
pub struct NoStore;

impl SaveStore for NoStore {
    fn load(&mut self) -> Result<Option<SaveData>> {
        Ok(None)
    }

    fn save(&mut self, _data: &SaveData) -> Result<()> {
        bail!("saving is not implemented")
    }
}
