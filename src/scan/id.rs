use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::filesystem::path;

/// Identifier of a course or a video, the base64 form of its `/`-joined relative path.
pub fn encode(path: &path::Relative) -> String {
    STANDARD.encode(path.as_str())
}

#[cfg(test)]
pub fn decode(id: &str) -> String {
    String::from_utf8(STANDARD.decode(id).unwrap()).unwrap()
}
