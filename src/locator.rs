use crate::adb::DeviceBridge;

/// Candidate system directories, searched in priority order. The first
/// directory containing the filename wins.
pub const TARGET_DIRS: [&str; 2] = ["/system/lib", "/system/vendor/lib"];

/// List a device directory's entries. A failed listing (missing directory,
/// permission problem) is treated as an empty directory, not an error.
async fn list_files(bridge: &impl DeviceBridge, directory: &str) -> Vec<String> {
    match bridge.run_elevated(&format!("ls {directory}")).await {
        Ok(output) => output
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect(),
        Err(e) => {
            log::debug!("listing {directory} failed, treating as empty: {e}");
            Vec::new()
        }
    }
}

/// Resolve a filename to its absolute device path, or `None` if it is absent
/// from every candidate directory.
pub async fn find_on_device(bridge: &impl DeviceBridge, filename: &str) -> Option<String> {
    for directory in TARGET_DIRS {
        let files = list_files(bridge, directory).await;
        if files.iter().any(|f| f == filename) {
            return Some(format!("{directory}/{filename}"));
        }
    }
    None
}
