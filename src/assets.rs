// src/assets.rs

use mime::Mime;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("banner image not found at {0}")]
    Missing(String),
    #[error("failed to read banner image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The header image on the Home page, read into memory at startup.
#[derive(Debug, Clone)]
pub struct Banner {
    bytes: Vec<u8>,
    content_type: Mime,
}

impl Banner {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AssetError::Missing(path.display().to_string()));
        }

        let bytes = fs::read(path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self::from_bytes(bytes, content_type_for(path)))
    }

    pub fn from_bytes(bytes: Vec<u8>, content_type: Mime) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }
}

pub fn content_type_for(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
