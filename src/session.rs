use crate::adb::{AdbResult, DeviceBridge};
use crate::backup::make_backup;
use crate::console::Prompt;
use crate::locator::find_on_device;
use crate::replace::{remount_system_rw, replace_file_on_device};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local directory layout; injectable so tests run against scratch paths.
pub struct SessionConfig {
    /// Operator-populated folder of replacement files.
    pub replace_dir: PathBuf,
    /// Tool-managed backup tree, one subdirectory per filename.
    pub backup_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            replace_dir: PathBuf::from("Replace"),
            backup_dir: PathBuf::from("Backup"),
        }
    }
}

struct Candidate {
    filename: String,
    local_path: PathBuf,
}

async fn replacement_candidates(replace_dir: &Path) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let Ok(mut entries) = fs::read_dir(replace_dir).await else {
        return candidates;
    };
    while let Ok(Some(entry)) = entries.next_entry().await {
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        if is_file {
            candidates.push(Candidate {
                filename: entry.file_name().to_string_lossy().into_owned(),
                local_path: entry.path(),
            });
        }
    }
    candidates.sort_by(|a, b| a.filename.cmp(&b.filename));
    candidates
}

/// Run the full replacement workflow: enumerate candidates, remount once,
/// then locate / confirm / back up / replace each file in turn.
///
/// Per-file failures are logged and the loop moves on; only the remount
/// double-failure aborts the run.
pub async fn run(
    bridge: &impl DeviceBridge,
    prompt: &mut impl Prompt,
    config: &SessionConfig,
) -> AdbResult<()> {
    println!("🚀 Starting library replacement...");
    let mut candidates = replacement_candidates(&config.replace_dir).await;

    if candidates.is_empty() {
        println!("📂 Replace folder is empty or missing.");
        if !prompt.confirm("Do you want to select a file manually? (y/n): ") {
            return Ok(());
        }
        let selected = PathBuf::from(prompt.read_path("Enter the path to the local file: "));
        if !selected.is_file() {
            println!("❌ Specified file does not exist.");
            return Ok(());
        }
        let filename = selected
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        candidates.push(Candidate {
            filename,
            local_path: selected,
        });
    }

    remount_system_rw(bridge).await?;

    for candidate in &candidates {
        println!("🔍 Looking for {} on the device...", candidate.filename);
        let Some(device_path) = find_on_device(bridge, &candidate.filename).await else {
            println!("❌ File {} not found on device.", candidate.filename);
            continue;
        };

        println!("📱 File found: {device_path}");
        if !prompt.confirm("Do you want to replace this file? (y/n): ") {
            continue;
        }

        if let Err(e) = make_backup(bridge, &config.backup_dir, &device_path, &candidate.filename).await {
            println!("⚠️ Backup failed for {}: {e}", candidate.filename);
            continue;
        }
        replace_file_on_device(bridge, &candidate.local_path, &device_path).await?;

        println!("✅ {} replaced successfully.", candidate.filename);
    }
    Ok(())
}
