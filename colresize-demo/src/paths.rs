//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "colresize";
const APPLICATION: &str = "colresize-demo";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/colresize-demo` or `~/.cache/colresize-demo`
/// - macOS: `~/Library/Caches/dev.colresize.colresize-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\colresize\colresize-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file, creating its directory if needed.
///
/// Falls back to the working directory when no cache directory exists.
pub fn log_file() -> PathBuf {
    let fallback = PathBuf::from("colresize-demo.log");
    let Some(dir) = cache_dir() else {
        return fallback;
    };
    match fs::create_dir_all(&dir) {
        Ok(()) => dir.join("latest.log"),
        Err(_) => fallback,
    }
}
