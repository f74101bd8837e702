// Core device bridge trait, implemented by the adb shell backend and by
// scripted fakes in tests.
use super::error::AdbResult;
use std::path::Path;

/// The single point of contact with the attached device.
///
/// `run_elevated` surfaces failures as structured errors because callers
/// decide the blast radius (skip one file vs. abort the run). `pull` and
/// `push` log the device's stderr themselves and only report success,
/// matching how the tool treats transfers as best-effort.
#[allow(async_fn_in_trait)]
pub trait DeviceBridge: Send + Sync {
    /// Execute a shell command with superuser privilege, returning stdout.
    async fn run_elevated(&self, command: &str) -> AdbResult<String>;

    /// Copy a file from the device to the local filesystem.
    async fn pull(&self, remote: &str, local: &Path) -> bool;

    /// Copy a local file to the device filesystem.
    async fn push(&self, local: &Path, remote: &str) -> bool;
}
