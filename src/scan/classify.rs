use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{id, natural};
use crate::filesystem::{self, path};

pub const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mkv", "webm", "avi", "mov", "m4v"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub name: String,
    pub filename: String,
    pub path: String,
}

impl Video {
    /// Returns the display name of `filename` if it has a recognized video extension.
    pub fn display_name(filename: &str) -> Option<&str> {
        let filename = path::Relative::new(filename);
        let extension = filename.extension()?;
        if VIDEO_EXTENSIONS.iter().any(|video| extension.eq_ignore_ascii_case(video)) {
            filename.file_stem()
        } else {
            None
        }
    }

    fn new(base: &path::Relative, filename: String) -> Option<Self> {
        let name = Self::display_name(&filename)?.to_owned();
        let path = base.join(filename.as_str());
        Some(Self { id: id::encode(&path), name, filename, path: path.into_string() })
    }
}

/// Lists the videos directly inside `folder`, naturally sorted by name.
///
/// `base` is the path of `folder` relative to the scanned root. A folder that can not be listed
/// has no videos.
pub fn classify(folder: &path::Local, base: &path::Relative) -> Vec<Video> {
    let entries = match filesystem::list_folder(folder) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::error!(folder = folder.as_str(), classify_list_folder_error = ?error);
            return vec![];
        }
    };

    entries
        .into_iter()
        .filter(|entry| entry.file_type.is_file())
        .filter_map(|entry| Video::new(base, entry.name))
        .sorted_by(|a, b| natural::compare(&a.name, &b.name))
        .collect()
}
