// Locates the configuration file for a project directory

use std::path::{Path, PathBuf};

use kompass_logger::Logger;

/// Well-known configuration filenames, in precedence order, relative to a
/// project root. The first four are the names the Compass compiler itself
/// probes; `kompass.json` is this tool's JSON form.
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    "config.rb",
    "compass.config",
    "config/compass.config",
    "config/compass.rb",
    "kompass.json",
];

/// Returns the first well-known configuration file that exists in `dir`.
pub fn find_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| {
        Logger::debug(&format!("Probing for configuration: {}", path.display()), 2);
        path.is_file()
    })
}

/// Searches for a configuration file starting at `start` and walking up
/// through parent directories. The search stops at a directory containing
/// `.git`, so it never leaves the repository the start directory is in.
pub fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if let Some(path) = find_in(dir) {
            Logger::debug(&format!("Found configuration: {}", path.display()), 1);
            return Some(path);
        }
        if dir.join(".git").exists() {
            return None;
        }
        dir = dir.parent()?;
    }
}
