use super::migration::migrate;
use super::types::ProgressionData;
use crate::core::constants::{FORMAT_VERSION, SAVE_FILE_NAME};
use crate::economy::CommitSink;
use crate::utils::persistence::{read_json, write_json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progression file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("progression document could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk envelope: the schema version next to the document.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDocument {
    #[serde(rename = "configVersion", default)]
    config_version: Option<u32>,
    #[serde(rename = "gameData", default)]
    game_data: Option<Value>,
}

/// Reads and writes the progression file.
#[derive(Debug, Clone)]
pub struct ProgressionStore {
    path: PathBuf,
}

impl ProgressionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SAVE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, migrating and repairing it. Any failure falls
    /// back to defaults; a missing document is created.
    pub fn load(&self) -> ProgressionData {
        let stored: StoredDocument = match read_json(&self.path) {
            Ok(stored) => stored,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self.create_default();
            }
            Err(e) => {
                log::warn!(
                    "Could not read {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                return ProgressionData::default();
            }
        };

        let Some(game_data) = stored.game_data else {
            return self.create_default();
        };

        let Some(version) = stored.config_version else {
            log::warn!("Progression document has no version, using defaults");
            return ProgressionData::default();
        };

        let mut data = migrate(version, game_data).unwrap_or_default();
        if data.repair() {
            log::warn!("Repaired inconsistent equipment selection in progression");
        }
        data
    }

    fn create_default(&self) -> ProgressionData {
        let data = ProgressionData::default();
        if let Err(e) = self.save(&data) {
            log::error!("Failed to create {}: {}", self.path.display(), e);
        }
        data
    }

    /// Writes the current version together with the full document.
    pub fn save(&self, data: &ProgressionData) -> Result<(), StoreError> {
        let stored = StoredDocument {
            config_version: Some(FORMAT_VERSION),
            game_data: Some(serde_json::to_value(data)?),
        };
        write_json(&self.path, &stored)?;
        Ok(())
    }
}

enum Command {
    Save(Box<ProgressionData>),
    Flush(Sender<()>),
}

/// Background writer. Snapshots queued while a write is in progress are
/// coalesced and only the newest is written. Failures are logged and dropped.
pub struct SaveQueue {
    sender: Option<Sender<Command>>,
    worker: Option<JoinHandle<()>>,
}

impl SaveQueue {
    pub fn spawn(store: ProgressionStore) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let worker = std::thread::Builder::new()
            .name("glupo-save".to_string())
            .spawn(move || run_writer(store, receiver))?;
        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    fn send(&self, command: Command) -> bool {
        match &self.sender {
            Some(sender) => sender.send(command).is_ok(),
            None => false,
        }
    }
}

impl CommitSink for SaveQueue {
    fn commit(&mut self, data: &ProgressionData) {
        if !self.send(Command::Save(Box::new(data.clone()))) {
            log::error!("Save queue is closed, dropping progression snapshot");
        }
    }

    fn flush(&mut self) {
        let (ack, done) = mpsc::channel();
        if !self.send(Command::Flush(ack)) {
            log::warn!("Save queue is closed, nothing to flush");
            return;
        }
        if done.recv().is_err() {
            log::warn!("Save writer stopped before acknowledging flush");
        }
    }
}

impl Drop for SaveQueue {
    fn drop(&mut self) {
        self.sender = None;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_writer(store: ProgressionStore, receiver: Receiver<Command>) {
    while let Ok(first) = receiver.recv() {
        let mut latest = None;
        let mut acks = Vec::new();
        let mut next = Some(first);
        while let Some(command) = next {
            match command {
                Command::Save(data) => latest = Some(data),
                Command::Flush(ack) => acks.push(ack),
            }
            next = receiver.try_recv().ok();
        }

        if let Some(data) = latest {
            if let Err(e) = store.save(&data) {
                log::error!("Failed to save progression: {}", e);
            }
        }
        for ack in acks {
            let _ = ack.send(());
        }
    }
}
