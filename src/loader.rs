//! Directory loader: one JSON file per object, keyed by file stem.

use crate::error::{DocError, Result};
use crate::model::{Catalog, DescriptionObject, SignatureObject, SiteMeta};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reserved description file holding [`SiteMeta`].
pub const SITE_FILE: &str = "site.json";

/// Load signatures, descriptions and site metadata for one run.
pub fn load_catalog(signatures_dir: &Path, descriptions_dir: &Path) -> Result<Catalog> {
    let signatures: IndexMap<String, SignatureObject> = load_dir(signatures_dir, &[])?;
    let descriptions: IndexMap<String, DescriptionObject> =
        load_dir(descriptions_dir, &[SITE_FILE])?;
    let site = load_site(&descriptions_dir.join(SITE_FILE))?;

    for name in descriptions.keys() {
        if !signatures.contains_key(name) {
            warn!(object = %name, "description has no matching signature file");
        }
    }

    info!(
        signatures = signatures.len(),
        descriptions = descriptions.len(),
        "loaded catalog"
    );

    Ok(Catalog {
        signatures,
        descriptions,
        site,
    })
}

/// Parse every `*.json` file in `dir` (non-recursive), keyed by file name
/// without the extension. Files named in `exclude` are skipped.
///
/// An existing but empty directory yields an empty map.
pub fn load_dir<T: DeserializeOwned>(dir: &Path, exclude: &[&str]) -> Result<IndexMap<String, T>> {
    if !dir.is_dir() {
        return Err(DocError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = IndexMap::new();
    for path in scan_json_files(dir)? {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        if exclude.contains(&file_name) {
            continue;
        }
        let name = file_name
            .strip_suffix(".json")
            .unwrap_or(file_name)
            .to_string();
        let value = read_json(&path)?;
        debug!(object = %name, path = %path.display(), "loaded");
        entries.insert(name, value);
    }
    Ok(entries)
}

/// Load `site.json`; a missing file yields empty metadata.
pub fn load_site(path: &Path) -> Result<SiteMeta> {
    if !path.is_file() {
        debug!(path = %path.display(), "no site metadata");
        return Ok(SiteMeta::default());
    }
    read_json(path)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| DocError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// List regular `*.json` files directly inside `dir`, sorted by name.
fn scan_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/*.json", escaped);
    let matches = glob::glob(&pattern).map_err(|source| DocError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in matches {
        let path = entry.map_err(|e| DocError::io(e.path().to_path_buf(), e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    // glob already yields sorted paths; sort again so output order never
    // depends on the scanner
    files.sort();
    Ok(files)
}
