//! Loading metadata directories and store settings from disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path};

use anyhow::Context;
use bytes::Bytes;
use tm_store::{MetadataStore, StoreConfig};
use tm_types::RoleName;
use tracing::debug;
use walkdir::WalkDir;

const METADATA_EXTENSION: &str = "json";

/// Read store settings from a TOML file, or use the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<StoreConfig> {
    let Some(path) = path else {
        return Ok(StoreConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Role name for a metadata file below `root`: the relative path without its
/// `.json` extension, `/`-separated (`targets/releases.json` becomes
/// `targets/releases`).
pub fn role_for(root: &Path, file: &Path) -> Option<RoleName> {
    if file.extension()? != METADATA_EXTENSION {
        return None;
    }
    let relative = file.strip_prefix(root).ok()?.with_extension("");
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?.to_owned()),
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(RoleName::new(parts.join("/")))
}

/// `set` every `*.json` file below `dir` into `store`. Returns the number of
/// files stored.
pub fn load_dir(store: &mut dyn MetadataStore, dir: &Path) -> anyhow::Result<usize> {
    let mut metas = HashMap::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(role) = role_for(dir, entry.path()) else {
            debug!(path = %entry.path().display(), "skipping non-metadata file");
            continue;
        };
        let data = fs::read(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        metas.insert(role.into_string(), Bytes::from(data));
    }
    let count = metas.len();
    store.set_multi(metas)?;
    debug!(count, dir = %dir.display(), location = %store.location(), "loaded metadata directory");
    Ok(count)
}
