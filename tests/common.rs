#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PASS: &str = "1234";

pub fn gb() -> Command {
    let mut cmd = cargo_bin_cmd!("gymbook");
    cmd.env_remove("GYMBOOK_PASSPHRASE");
    cmd
}

/// Private data directory and config path for one test.
pub struct Sandbox {
    pub data_dir: String,
    pub config: String,
}

impl Sandbox {
    /// Command bound to this sandbox, without passphrase.
    pub fn cmd(&self) -> Command {
        let mut cmd = gb();
        cmd.args(["--config", &self.config, "--data-dir", &self.data_dir]);
        cmd
    }

    /// Command bound to this sandbox, with the coach passphrase.
    pub fn coach(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--passphrase", PASS]);
        cmd
    }

    pub fn file(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.data_dir).join(name)
    }
}

/// Fresh sandbox inside the system temp dir; any previous run is removed.
pub fn setup_sandbox(name: &str) -> Sandbox {
    let mut root: PathBuf = env::temp_dir();
    root.push(format!("gymbook_{name}"));
    fs::remove_dir_all(&root).ok();

    Sandbox {
        data_dir: root.join("data").to_string_lossy().to_string(),
        config: root.join("gymbook.conf").to_string_lossy().to_string(),
    }
}

/// Temporary output file path inside the temp dir, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("gymbook_{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the tables and book three lessons for Amy (10 credits).
pub fn init_with_data(sb: &Sandbox) {
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.coach()
        .args([
            "student",
            "add",
            "Amy",
            "--purchased",
            "10",
            "--category",
            "MA Body Shaping",
        ])
        .assert()
        .success();

    for (date, time) in [
        ("2025-03-10", "09:00"),
        ("2025-03-10", "18:30"),
        ("2025-03-12", "07:00"),
    ] {
        sb.coach()
            .args(["lesson", "add", date, time, "Amy"])
            .assert()
            .success();
    }
}
