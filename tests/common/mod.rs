//! Test environment for running the stockroom binary in isolation.
//!
//! Each `TestEnv` owns a temp working directory and a temp HOME so no
//! developer config leaks into the run.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a stockroom CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("STOCKROOM_SEED")
            .env_remove("STOCKROOM_CURRENCY")
            .env_remove("STOCKROOM_COLOR")
            .env_remove("STOCKROOM_VERBOSITY");
        cmd
    }

    /// Run with closed stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with_env(args, input, &[])
    }

    pub fn run_with_env(&self, args: &[&str], input: &str, env: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.envs(env.iter().copied())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().unwrap();
        {
            let mut stdin = child.stdin.take().unwrap();
            // The child may exit before reading stdin (e.g. on argument errors).
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "{e}");
            }
        }
        child.wait_with_output().unwrap().into()
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}
