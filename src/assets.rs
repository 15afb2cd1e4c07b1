//! Static bundle lookup for hosting the built UI.
//!
//! Request paths resolve to a bundled asset either by exact key or through
//! a content-hash manifest mapping logical paths (`app.js`) to the hashed
//! keys they were uploaded under (`app.3f9c2e.js`).

use std::collections::HashMap;

use crate::error::AssetError;

pub const INDEX_DOCUMENT: &str = "index.html";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Asset {
    /// An asset whose content type is inferred from `key`.
    pub fn for_key(key: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type_for(key),
            body: body.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AssetBundle {
    assets: HashMap<String, Asset>,
    manifest: HashMap<String, String>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, body: impl Into<Vec<u8>>) {
        let key = key.into();
        let asset = Asset::for_key(&key, body);
        self.assets.insert(key, asset);
    }

    pub fn map(&mut self, logical: impl Into<String>, hashed: impl Into<String>) {
        self.manifest.insert(logical.into(), hashed.into());
    }

    /// Merge a JSON manifest object of `{"logical": "hashed"}` pairs.
    pub fn load_manifest_json(&mut self, json: &str) -> Result<(), AssetError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|err| AssetError::Manifest(err.to_string()))?;
        self.manifest.extend(entries);
        Ok(())
    }

    pub fn resolve(&self, request_path: &str) -> Result<&Asset, AssetError> {
        let key = asset_key(request_path);
        self.assets
            .get(&key)
            .or_else(|| {
                self.manifest
                    .get(&key)
                    .and_then(|hashed| self.assets.get(hashed))
            })
            .ok_or(AssetError::NotFound(key))
    }
}

/// Map a request path onto a bundle key.
///
/// Query and fragment are dropped, the leading slash is removed, directory
/// paths get `index.html` appended and extension-less paths are treated as
/// directories.
pub fn asset_key(request_path: &str) -> String {
    let path = request_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('/');

    if path.is_empty() {
        return INDEX_DOCUMENT.to_string();
    }
    if path.ends_with('/') {
        return format!("{path}{INDEX_DOCUMENT}");
    }
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    if last_segment.contains('.') {
        path.to_string()
    } else {
        format!("{path}/{INDEX_DOCUMENT}")
    }
}

pub fn content_type_for(key: &str) -> &'static str {
    let extension = key.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webmanifest") => "application/manifest+json",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
