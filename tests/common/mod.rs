//! Shared testing utilities for lifetracker-admin CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROJECT_ID: &str = "demo-lifetracker";

const SERVICE_ACCOUNT_FIXTURE: &str = include_str!("../fixtures/service_account.json");

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled binary, isolated from any ambient emulator setting.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("lifetracker-admin").expect("Failed to locate lifetracker-admin binary");
        cmd.current_dir(self.work_dir()).env_remove("FIREBASE_AUTH_EMULATOR_HOST");
        cmd
    }

    /// Build a command pointed at an emulator served by `server`.
    pub fn cli_with_emulator(&self, server: &mockito::Server) -> Command {
        let mut cmd = self.cli();
        cmd.env("FIREBASE_AUTH_EMULATOR_HOST", server.host_with_port());
        cmd
    }

    /// Write the fixture credential under `name` in the working directory.
    pub fn write_service_account(&self, name: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, SERVICE_ACCOUNT_FIXTURE).expect("Failed to write service account");
        path
    }

    /// Write the fixture credential at the default location.
    pub fn write_default_service_account(&self) -> PathBuf {
        self.write_service_account("fbadmin.private.json")
    }
}

/// Path the emulator serves `accounts:update` on for the fixture project.
pub fn emulator_update_path() -> String {
    format!("/identitytoolkit.googleapis.com/v1/projects/{}/accounts:update", PROJECT_ID)
}
