//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "datatables";
const APPLICATION: &str = "vercel-projects";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/vercel-projects` or `~/.cache/vercel-projects`
/// - macOS: `~/Library/Caches/dev.datatables.vercel-projects`
/// - Windows: `C:\Users\<User>\AppData\Local\datatables\vercel-projects\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
///
/// Falls back to the working directory when no home directory is known.
pub fn log_file() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join("latest.log"))
        .unwrap_or_else(|| PathBuf::from("vercel-projects.log"))
}
