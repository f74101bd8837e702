use super::error::{AdbError, AdbResult};
use super::types::DeviceBridge;
use std::path::Path;
use tokio::process::Command;

/// Device gateway backed by the external `adb` binary.
///
/// Every call spawns one subprocess and blocks on it; no retries happen at
/// this layer (retry policy lives in callers, e.g. the remount fallback).
pub struct AdbShell {
    adb_path: String,
}

impl AdbShell {
    pub fn new() -> AdbResult<Self> {
        Self::ensure_adb_available()?;
        Ok(Self {
            adb_path: "adb".to_string(),
        })
    }

    fn ensure_adb_available() -> AdbResult<()> {
        match std::process::Command::new("adb").arg("version").output() {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => Err(AdbError::ElevatedCommandFailed {
                command: "adb version".to_string(),
                stderr: format!("'adb' returned non-zero ({})", out.status),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AdbError::AdbNotFound),
            Err(e) => Err(AdbError::Spawn { source: e }),
        }
    }

    /// `adb shell` joins its remaining arguments with spaces, so the whole
    /// `su -c "<command>"` invocation travels as one argument.
    pub(crate) fn elevated_arg(command: &str) -> String {
        format!("su -c \"{command}\"")
    }
}

impl DeviceBridge for AdbShell {
    async fn run_elevated(&self, command: &str) -> AdbResult<String> {
        log::debug!("adb shell su -c '{command}'");
        let output = Command::new(&self.adb_path)
            .arg("shell")
            .arg(Self::elevated_arg(command))
            .output()
            .await
            .map_err(|e| AdbError::Spawn { source: e })?;
        if !output.status.success() {
            return Err(AdbError::ElevatedCommandFailed {
                command: command.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn pull(&self, remote: &str, local: &Path) -> bool {
        log::debug!("adb pull {remote} -> {}", local.display());
        match Command::new(&self.adb_path)
            .arg("pull")
            .arg(remote)
            .arg(local)
            .output()
            .await
        {
            Ok(out) if out.status.success() => true,
            Ok(out) => {
                println!(
                    "⚠️ Error while pulling file from device:\n{}",
                    String::from_utf8_lossy(&out.stderr).trim()
                );
                false
            }
            Err(e) => {
                println!("⚠️ Failed to run adb pull: {e}");
                false
            }
        }
    }

    async fn push(&self, local: &Path, remote: &str) -> bool {
        log::debug!("adb push {} -> {remote}", local.display());
        match Command::new(&self.adb_path)
            .arg("push")
            .arg(local)
            .arg(remote)
            .output()
            .await
        {
            Ok(out) if out.status.success() => true,
            Ok(out) => {
                println!(
                    "⚠️ Error while pushing file to device:\n{}",
                    String::from_utf8_lossy(&out.stderr).trim()
                );
                false
            }
            Err(e) => {
                println!("⚠️ Failed to run adb push: {e}");
                false
            }
        }
    }
}
