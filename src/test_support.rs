// Scripted stand-ins for the device bridge and the operator console.
// The fake device interprets the handful of elevated commands the tool
// issues (ls/cp/chmod/rm/mount) against an in-memory filesystem.

use crate::adb::error::{AdbError, AdbResult};
use crate::adb::types::DeviceBridge;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;

#[derive(Default)]
struct DeviceState {
    files: HashMap<String, Vec<u8>>,
    modes: HashMap<String, String>,
    commands: Vec<String>,
    pulls: Vec<String>,
    pushes: Vec<String>,
}

#[derive(Default)]
pub struct FakeDevice {
    state: Mutex<DeviceState>,
    fail_primary_remount: bool,
    fail_alternative_remount: bool,
    fail_push: bool,
    fail_pull: bool,
    fail_chmod: bool,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.set_file(path, content);
        self
    }

    pub fn failing_primary_remount(mut self) -> Self {
        self.fail_primary_remount = true;
        self
    }

    pub fn failing_alternative_remount(mut self) -> Self {
        self.fail_alternative_remount = true;
        self
    }

    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    pub fn failing_pull(mut self) -> Self {
        self.fail_pull = true;
        self
    }

    pub fn failing_chmod(mut self) -> Self {
        self.fail_chmod = true;
        self
    }

    pub fn set_file(&self, path: &str, content: &[u8]) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.to_string(), content.to_vec());
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn mode(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().modes.get(path).cloned()
    }

    /// Every elevated command issued, in order.
    pub fn commands(&self) -> Vec<String> {
        self.state.lock().unwrap().commands.clone()
    }

    pub fn pull_count(&self) -> usize {
        self.state.lock().unwrap().pulls.len()
    }

    pub fn push_count(&self) -> usize {
        self.state.lock().unwrap().pushes.len()
    }
}

fn command_error(command: &str, stderr: &str) -> AdbError {
    AdbError::ElevatedCommandFailed {
        command: command.to_string(),
        stderr: stderr.to_string(),
    }
}

impl DeviceBridge for FakeDevice {
    async fn run_elevated(&self, command: &str) -> AdbResult<String> {
        let mut state = self.state.lock().unwrap();
        state.commands.push(command.to_string());

        if command == "mount -o rw,remount /system" {
            return if self.fail_primary_remount {
                Err(command_error(command, "mount: Permission denied"))
            } else {
                Ok(String::new())
            };
        }
        if command == "mount -o rw,remount /dev/block/bootdevice/by-name/system /system" {
            return if self.fail_alternative_remount {
                Err(command_error(command, "mount: No such device"))
            } else {
                Ok(String::new())
            };
        }
        if let Some(dir) = command.strip_prefix("ls ") {
            let prefix = format!("{dir}/");
            let mut names: Vec<String> = state
                .files
                .keys()
                .filter_map(|p| p.strip_prefix(&prefix))
                .filter(|rest| !rest.contains('/'))
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                return Err(command_error(command, "ls: No such file or directory"));
            }
            names.sort();
            return Ok(names.join("\n"));
        }
        if let Some(rest) = command.strip_prefix("cp ") {
            let mut parts = rest.split_whitespace();
            if let (Some(src), Some(dst)) = (parts.next(), parts.next()) {
                return match state.files.get(src).cloned() {
                    Some(bytes) => {
                        state.files.insert(dst.to_string(), bytes);
                        Ok(String::new())
                    }
                    None => Err(command_error(command, "cp: No such file or directory")),
                };
            }
        }
        if let Some(path) = command.strip_prefix("chmod 644 ") {
            if self.fail_chmod {
                return Err(command_error(command, "chmod: Read-only file system"));
            }
            state.modes.insert(path.to_string(), "644".to_string());
            return Ok(String::new());
        }
        if let Some(path) = command.strip_prefix("rm ") {
            return if state.files.remove(path).is_some() {
                Ok(String::new())
            } else {
                Err(command_error(command, "rm: No such file or directory"))
            };
        }
        Err(command_error(command, "sh: inaccessible or not found"))
    }

    async fn pull(&self, remote: &str, local: &Path) -> bool {
        let bytes = {
            let mut state = self.state.lock().unwrap();
            state.pulls.push(remote.to_string());
            if self.fail_pull {
                None
            } else {
                state.files.get(remote).cloned()
            }
        };
        match bytes {
            Some(bytes) => tokio::fs::write(local, bytes).await.is_ok(),
            None => false,
        }
    }

    async fn push(&self, local: &Path, remote: &str) -> bool {
        self.state.lock().unwrap().pushes.push(remote.to_string());
        if self.fail_push {
            return false;
        }
        match tokio::fs::read(local).await {
            Ok(bytes) => {
                self.state
                    .lock()
                    .unwrap()
                    .files
                    .insert(remote.to_string(), bytes);
                true
            }
            Err(_) => false,
        }
    }
}

/// Console prompt answering from a fixed script; an exhausted script
/// declines every further question.
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl crate::console::Prompt for ScriptedPrompt {
    fn confirm(&mut self, _question: &str) -> bool {
        self.answers
            .pop_front()
            .map(|a| a.eq_ignore_ascii_case("y"))
            .unwrap_or(false)
    }

    fn read_path(&mut self, _question: &str) -> String {
        self.answers.pop_front().unwrap_or_default()
    }
}
