pub use typed_path::{
    Utf8NativePath as Local, Utf8NativePathBuf as LocalBuf, Utf8UnixPath as Relative,
};

use crate::Error;

/// Resolves `path` against the current working directory.
///
/// `.` and `..` components are resolved lexically and symbolic links are left untouched.
pub fn absolute(path: &Local) -> Result<LocalBuf, Error> {
    if path.is_absolute() {
        Ok(path.normalize())
    } else {
        let current_dir = std::env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(Error::NonUTF8PathEncountered)?;
        Ok(Local::new(&current_dir).join(path).normalize())
    }
}
