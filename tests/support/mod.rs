use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch home for one test: a tempdir holding the save file, plus a
/// command builder pre-wired to use it.
pub struct TestSpace {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestSpace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn save_file(&self) -> PathBuf {
        self.dir.path().join("tasks.txt")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tsk").expect("binary");
        cmd.env("TSK_FILE", self.save_file());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn write_save_file(&self, contents: &str) {
        fs::write(self.save_file(), contents).expect("failed to seed save file");
    }

    pub fn read_save_file(&self) -> String {
        fs::read_to_string(self.save_file()).expect("failed to read save file")
    }
}
