use std::fs;
use std::io;
use std::path::Path;

pub fn exists(file_name:&str) -> Option<&str> {
    if !fs::metadata(file_name).is_ok() {
        return None
    }
    return Some(file_name)
}

/// Ensure the directory that will contain `path` exists.
/// Directory creation is the first I/O fault surface in a batch render,
/// so the error goes back to the caller instead of aborting the run.
pub fn with_dir(path: &str) -> io::Result<()> {
    let path = Path::new(path);

    // Check if the path's final component is likely a file (by checking for an extension)
    let dir = if path.extension().is_some() {
        path.parent().unwrap_or_else(|| Path::new("/"))
    } else {
        path
    };

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
