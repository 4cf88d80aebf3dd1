use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("project");
        fs::create_dir_all(&root).expect("create isolated project root");
        Self { _tmp: tmp, root }
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.root.join("resmark.toml"), contents).expect("write config file");
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("src/main/resources")
    }

    pub fn marker_path(&self) -> PathBuf {
        self.resources_dir().join("HelloWorld.txt")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("resmark");
        cmd.current_dir(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
