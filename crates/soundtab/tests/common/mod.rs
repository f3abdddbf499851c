//! Common test utilities for SoundTab integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Create a test environment with an isolated application root
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub inbox: PathBuf,
}

impl TestEnv {
    /// Create a new test environment
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join("soundtab");
        let inbox = temp_dir.path().join("inbox");

        std::fs::create_dir_all(&inbox)?;

        Ok(Self {
            temp_dir,
            root,
            inbox,
        })
    }

    /// Path of a file under the application root
    pub fn root_file(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Write a fake sound into the inbox directory
    pub fn inbox_sound(&self, name: &str) -> anyhow::Result<PathBuf> {
        let path = self.inbox.join(name);
        std::fs::write(&path, b"RIFF....WAVEfmt ")?;
        Ok(path)
    }

    /// Create a command whose root is resolved through SOUNDTAB_HOME
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_soundtab"));
        cmd.env("SOUNDTAB_HOME", &self.root);
        cmd.env("HOME", self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new().expect("Failed to create test environment")
    }
}
