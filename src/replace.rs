use crate::adb::{AdbError, AdbResult, DeviceBridge};
use std::path::Path;

/// Unprivileged staging location for pushed files; the elevated copy moves
/// them from here into the protected target directory.
pub const STAGING_DIR: &str = "/sdcard";

const REMOUNT_PRIMARY: &str = "mount -o rw,remount /system";
const REMOUNT_ALTERNATIVE: &str =
    "mount -o rw,remount /dev/block/bootdevice/by-name/system /system";

/// Force `/system` read-write. Tries the generic remount first, then the
/// by-name block device variant. Both failing is fatal for the whole run.
/// Remounting an already-writable partition is harmless, so callers may
/// invoke this once per run or once per file.
pub async fn remount_system_rw(bridge: &impl DeviceBridge) -> AdbResult<()> {
    println!("🔧 Attempting to remount /system as rw...");
    match bridge.run_elevated(REMOUNT_PRIMARY).await {
        Ok(_) => {
            println!("✅ /system successfully remounted as rw.");
            Ok(())
        }
        Err(primary) => {
            println!("⚠️ Standard remount failed, trying alternative method...");
            log::debug!("primary remount error: {primary}");
            match bridge.run_elevated(REMOUNT_ALTERNATIVE).await {
                Ok(_) => {
                    println!("✅ Alternative remount succeeded.");
                    Ok(())
                }
                Err(alternative) => {
                    println!("❌ Failed to remount /system.");
                    log::debug!("alternative remount error: {alternative}");
                    Err(AdbError::RemountFailed)
                }
            }
        }
    }
}

/// Stage the local file on `/sdcard`, then copy it over the target with
/// elevated commands, set mode 644 and remove the staging copy.
///
/// The cp/chmod/rm triplet is not transactional: a failure mid-way logs and
/// stops, leaving earlier effects in place (e.g. the target already replaced
/// with inherited permissions). Only a remount failure is escalated.
pub async fn replace_file_on_device(
    bridge: &impl DeviceBridge,
    local_file: &Path,
    remote_path: &str,
) -> AdbResult<()> {
    let filename = remote_path.rsplit('/').next().unwrap_or(remote_path);
    let staging_path = format!("{STAGING_DIR}/{filename}");

    println!("📤 Uploading to temporary path: {staging_path}");
    if !bridge.push(local_file, &staging_path).await {
        println!("❌ Failed to push file to temporary path.");
        return Ok(());
    }

    remount_system_rw(bridge).await?;

    println!("📁 Copying file from {STAGING_DIR}/ to {remote_path} using su...");
    let steps = [
        format!("cp {staging_path} {remote_path}"),
        format!("chmod 644 {remote_path}"),
        format!("rm {staging_path}"),
    ];
    for step in &steps {
        if let Err(e) = bridge.run_elevated(step).await {
            println!("❌ Error during copy/delete operations: {e}");
            return Ok(());
        }
    }
    println!("✅ File copied, permissions set, temporary file deleted.");
    Ok(())
}
