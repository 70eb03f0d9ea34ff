use crate::configuration::KeyboardConfiguration;
use crate::error::KcResult;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Persistence seam for configurations. Saving an existing id replaces it.
pub trait ConfigurationStore {
    fn save(&mut self, configuration: &KeyboardConfiguration) -> KcResult<()>;
    fn load(&self, id: &str) -> KcResult<Option<KeyboardConfiguration>>;
    /// Returns whether anything was removed.
    fn delete(&mut self, id: &str) -> KcResult<bool>;
    fn list(&self) -> KcResult<Vec<KeyboardConfiguration>>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, KeyboardConfiguration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigurationStore for MemoryStore {
    fn save(&mut self, configuration: &KeyboardConfiguration) -> KcResult<()> {
        self.entries
            .insert(configuration.id.clone(), configuration.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> KcResult<Option<KeyboardConfiguration>> {
        Ok(self.entries.get(id).cloned())
    }

    fn delete(&mut self, id: &str) -> KcResult<bool> {
        Ok(self.entries.remove(id).is_some())
    }

    fn list(&self) -> KcResult<Vec<KeyboardConfiguration>> {
        let mut all: Vec<_> = self.entries.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }
}

/// One pretty-printed `<id>.json` per configuration inside `root`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates `root` if it does not exist yet.
    pub fn open<P: AsRef<Path>>(root: P) -> KcResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_id(id)))
    }
}

/// Keeps ids inside the store directory. Bytes outside `[A-Za-z0-9-]` are written
/// as `_xx` (lowercase hex), `_` included, so distinct ids never share a file.
fn encode_id(id: &str) -> String {
    if id.is_empty() {
        return "_".to_string();
    }

    let mut out = String::with_capacity(id.len());
    for b in id.bytes() {
        if b.is_ascii_alphanumeric() || b == b'-' {
            out.push(b as char);
        } else {
            out.push_str(&format!("_{:02x}", b));
        }
    }
    out
}

impl ConfigurationStore for JsonFileStore {
    fn save(&mut self, configuration: &KeyboardConfiguration) -> KcResult<()> {
        let path = self.path_for(&configuration.id);
        let json = serde_json::to_string_pretty(configuration)?;
        fs::write(&path, json)?;
        info!(id = %configuration.id, path = %path.display(), "saved configuration");
        Ok(())
    }

    fn load(&self, id: &str) -> KcResult<Option<KeyboardConfiguration>> {
        let path = self.path_for(id);
        if !path.exists() {
            debug!(id, "configuration not in store");
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let configuration: KeyboardConfiguration = serde_json::from_str(&content)?;
        if configuration.id != id {
            warn!(id, stored = %configuration.id, path = %path.display(), "stored id does not match");
            return Ok(None);
        }
        Ok(Some(configuration))
    }

    fn delete(&mut self, id: &str) -> KcResult<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        info!(id, path = %path.display(), "deleted configuration");
        Ok(true)
    }

    /// Files that fail to parse are skipped with a warning; io errors still fail.
    fn list(&self) -> KcResult<Vec<KeyboardConfiguration>> {
        let mut all = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<KeyboardConfiguration>(&content) {
                Ok(configuration) => all.push(configuration),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable configuration"),
            }
        }
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }
}
