//! Common test utilities for Stower CLI tests.
//!
//! Provides `TestEnv`: an isolated temp directory with `src/` and `dest/`
//! plus helpers to run the stower binary inside it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a stower CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(root.path().join("src")).expect("failed to create src");
        Self { root }
    }

    pub fn src(&self) -> PathBuf {
        self.root.path().join("src")
    }

    pub fn dest(&self) -> PathBuf {
        self.root.path().join("dest")
    }

    /// Write a file below `src/`, creating parents.
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.src().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent");
        }
        fs::write(&path, content).expect("failed to write source file");
        path
    }

    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.root.path().join("config.yml");
        fs::write(&path, yaml).expect("failed to write config");
        path
    }

    /// Run stower from the environment root with a clean STOWER_* environment.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stower"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("STOWER_DEBUG")
            .env_remove("STOWER_COPY")
            .env_remove("STOWER_DRY_RUN")
            .env_remove("STOWER_MAPPER");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute stower"))
    }

    /// Files below `dest/`, relative and `/`-joined, sorted
    pub fn destination_files(&self) -> Vec<String> {
        let dest = self.dest();
        let mut files: Vec<String> = walkdir::WalkDir::new(&dest)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| relative(&dest, entry.path()))
            .collect();
        files.sort();
        files
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .expect("path below root")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
pub fn same_inode(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    let a = fs::metadata(a).expect("stat a");
    let b = fs::metadata(b).expect("stat b");
    a.dev() == b.dev() && a.ino() == b.ino()
}
