use thiserror::Error;

/// A specialized `Result` type for ADB operations.
pub type AdbResult<T> = Result<T, AdbError>;

/// The error type for all ADB-related operations.
#[derive(Debug, Error)]
pub enum AdbError {
    #[error(
        "'adb' binary not found in PATH. Install Android Platform Tools (https://developer.android.com/tools/adb) or add 'adb' to PATH."
    )]
    AdbNotFound,

    #[error("Failed to invoke 'adb': {source}")]
    Spawn { source: std::io::Error },

    #[error("Elevated command '{command}' failed: {stderr}")]
    ElevatedCommandFailed { command: String, stderr: String },

    #[error("Failed to remount /system as read-write (standard and alternative mount both failed)")]
    RemountFailed,

    #[error("Local filesystem error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
