pub mod path;

use std::fs::FileType;

#[derive(Debug)]
pub struct Entry {
    pub name: String,
    pub file_type: FileType,
}

/// Lists the immediate children of `folder` in the order the host filesystem returns them.
///
/// Entries that can not be inspected or whose names are not valid UTF-8 are logged and skipped,
/// only a failure to open `folder` itself is returned to the caller. File types are not resolved
/// through symbolic links.
pub fn list_folder(folder: &path::Local) -> Result<Vec<Entry>, std::io::Error> {
    let folder = folder.as_str();
    Ok(std::fs::read_dir(folder)?
        .filter_map(|entry| {
            let entry = entry
                .inspect_err(|error| tracing::warn!(folder, list_folder_entry_error = ?error))
                .ok()?;
            let file_type = entry
                .file_type()
                .inspect_err(|error| tracing::warn!(folder, list_folder_file_type_error = ?error))
                .ok()?;
            let name = entry
                .file_name()
                .into_string()
                .inspect_err(|name| tracing::warn!(folder, list_folder_non_utf8_name = ?name))
                .ok()?;
            Some(Entry { name, file_type })
        })
        .collect())
}
