use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    core::{
        normalize::normalize_state,
        utils::{app_data_dir, ensure_dir, state_file_in},
    },
    domain::ledger::Ledger,
};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores the aggregate as one JSON document under a fixed file name.
///
/// The stored shape may be a legacy or partial one; every load runs the
/// normalizer, so callers only ever observe a well-formed ledger.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    state_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        Ok(Self {
            state_file: state_file_in(&base),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn state_path(&self) -> &Path {
        &self.state_file
    }

    /// Fire-and-forget save: a failure is logged and swallowed.
    pub fn save_best_effort(&self, ledger: &Ledger) {
        if let Err(err) = self.save(ledger) {
            tracing::warn!("failed to persist ledger state: {err}");
        }
    }

    /// Loads the last saved aggregate, degrading to the empty ledger when
    /// the document is absent or unreadable.
    pub fn load_or_empty(&self) -> Ledger {
        match self.load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => Ledger::default(),
            Err(err) => {
                tracing::warn!("failed to load ledger state: {err}");
                Ledger::default()
            }
        }
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.state_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.state_file)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Ledger>> {
        if !self.state_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.state_file)?;
        let raw: Value = serde_json::from_str(&data)?;
        Ok(Some(normalize_state(&raw)))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
