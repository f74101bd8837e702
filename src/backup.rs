use crate::adb::{AdbResult, DeviceBridge};
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Pull the current on-device file into a fresh local backup directory before
/// any mutation happens.
///
/// The per-filename directory under `backup_root` is the "current" backup; an
/// existing one is archived by renaming it with a timestamp suffix, never
/// deleted. A failed pull still leaves the (empty) directory behind and the
/// run continues - the backup is best-effort, not a gate for the replacement.
pub async fn make_backup(
    bridge: &impl DeviceBridge,
    backup_root: &Path,
    remote_path: &str,
    filename: &str,
) -> AdbResult<PathBuf> {
    fs::create_dir_all(backup_root).await?;

    let file_backup_dir = backup_root.join(filename);
    if fs::try_exists(&file_backup_dir).await? {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let archived = backup_root.join(format!("{filename}_{timestamp}"));
        fs::rename(&file_backup_dir, &archived).await?;
        log::debug!("archived previous backup to {}", archived.display());
    }
    fs::create_dir(&file_backup_dir).await?;

    let local_backup_path = file_backup_dir.join(filename);
    if !bridge.pull(remote_path, &local_backup_path).await {
        println!("⚠️ Pull failed; continuing without a verified backup.");
    }
    println!("💾 Backup saved to: {}", local_backup_path.display());
    Ok(local_backup_path)
}
