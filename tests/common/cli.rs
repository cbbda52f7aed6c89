//! Helpers for running the `civic` binary inside a throwaway workspace.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

const SCRUBBED_ENV: [&str; 8] = [
    "RUST_LOG",
    "CIVICLENS_DATA",
    "CIVICLENS_SESSION_FILE",
    "CIVICLENS_LOG_FILE",
    "CIVICLENS_SORT",
    "CIVICLENS_VIEW",
    "CIVICLENS_COMPOSE",
    "CIVICLENS_MAP_FORMAT",
];

/// A temp directory used as both working directory and `$HOME`.
pub struct CivicWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl CivicWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp workspace");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write workspace file");
        path
    }

    pub fn session_file(&self) -> PathBuf {
        self.path(".civiclens/session.json")
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

pub fn civic_command(workspace: &CivicWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_civic"));
    cmd.current_dir(&workspace.root);
    cmd.env("HOME", &workspace.root);
    cmd.env("NO_COLOR", "1");
    for key in SCRUBBED_ENV {
        cmd.env_remove(key);
    }
    cmd.env_remove("CIVICLENS_PASSWORD");
    cmd
}

pub fn run_civic<I, S>(workspace: &CivicWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = civic_command(workspace)
        .args(args)
        .output()
        .expect("run civic");
    let result = CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    eprintln!(
        "[{label}] exit={:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
        result.status.code(),
        result.stdout,
        result.stderr
    );
    result
}

pub fn login_admin(workspace: &CivicWorkspace) {
    let out = run_civic(
        workspace,
        ["login", "--email", "admin@civiclens.com", "--password", "admin123"],
        "login_admin",
    );
    assert!(out.status.success(), "admin login failed: {}", out.stderr);
}

pub fn login_officer(workspace: &CivicWorkspace) {
    let out = run_civic(
        workspace,
        ["login", "--email", "dept@civiclens.com", "--password", "dept123"],
        "login_officer",
    );
    assert!(out.status.success(), "officer login failed: {}", out.stderr);
}

pub fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("array of issues")
        .iter()
        .map(|issue| issue["id"].as_str().expect("id").to_string())
        .collect()
}

