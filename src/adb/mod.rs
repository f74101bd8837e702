// ADB module - gateway to the attached Android device.
// All device communication goes through the `DeviceBridge` trait; the shell
// backend drives the external `adb` binary as a subprocess.

pub mod error;
pub mod shell;
pub mod types;


// Re-export the main types for easy access
pub use error::{AdbError, AdbResult};
pub use shell::AdbShell;
pub use types::DeviceBridge;
