//! `data:` URL encoding, the interchange format for images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::DataUrlError;

pub const PNG_PREFIX: &str = "data:image/png;base64,";

/// A decoded `data:<mime>;base64,<payload>` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn encode_png(bytes: &[u8]) -> String {
    encode("image/png", bytes)
}

pub fn decode(url: &str) -> Result<DataUrl, DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingScheme)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(DataUrlError::NotBase64)?;

    Ok(DataUrl {
        mime: mime.to_string(),
        bytes: STANDARD.decode(payload)?,
    })
}

/// Decode a PNG data-URL, rejecting anything without the exact
/// [`PNG_PREFIX`].
pub fn decode_png(url: &str) -> Result<Vec<u8>, DataUrlError> {
    let payload = url.strip_prefix(PNG_PREFIX).ok_or(DataUrlError::NotPng)?;
    Ok(STANDARD.decode(payload)?)
}
