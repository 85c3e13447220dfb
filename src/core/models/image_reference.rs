use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::global_constants::{LOG_TAG_IMAGE_REFERENCE, UPLOAD_FILE_NAME, UPLOAD_MIME_TYPE};

const FILE_URI_SCHEME: &str = "file://";

/// Handle to a captured image on local disk. Holds the location, never the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub uri: String,
    pub mime_type: String,
    pub file_name: String,
}

impl ImageReference {
    pub fn from_captured_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        log::debug!("{} building reference for {}", LOG_TAG_IMAGE_REFERENCE, uri);

        Self {
            uri,
            mime_type: UPLOAD_MIME_TYPE.to_string(),
            file_name: UPLOAD_FILE_NAME.to_string(),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_captured_uri(path_to_file_uri(path))
    }

    pub fn local_path(&self) -> Result<PathBuf> {
        file_uri_to_path(&self.uri)
    }
}

pub fn path_to_file_uri(path: &Path) -> String {
    let encoded: Vec<String> = path
        .to_string_lossy()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();

    format!("{}{}", FILE_URI_SCHEME, encoded.join("/"))
}

pub fn file_uri_to_path(uri: &str) -> Result<PathBuf> {
    let Some(encoded_path) = uri.strip_prefix(FILE_URI_SCHEME) else {
        return Ok(PathBuf::from(uri));
    };

    if encoded_path.is_empty() {
        anyhow::bail!("Image URI has no path: {}", uri);
    }

    let decoded = urlencoding::decode(encoded_path)
        .map_err(|e| anyhow::anyhow!("Invalid image URI {}: {}", uri, e))?;

    Ok(PathBuf::from(decoded.into_owned()))
}
