//! End-to-end tests driving the ovs-query binary against a fake ovs-vsctl.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Drop a shell script named `ovs-vsctl` into `dir` and make it executable.
fn fake_vsctl(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("ovs-vsctl");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

fn ovs_query(fake: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ovs-query").unwrap();
    cmd.env("OVS_VSCTL_PATH", fake);
    cmd
}

#[test]
fn test_list_br() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(dir.path(), "printf 'br0\\nbr1\\n'");

    ovs_query(&fake)
        .arg("list-br")
        .assert()
        .success()
        .stdout("br0\nbr1\n");
}

#[test]
fn test_show() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(dir.path(), "printf 'ovs_version: \"2.5.0\"\\n'");

    ovs_query(&fake)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("ovs_version: 2.5.0"));
}

#[test]
fn test_list_records_as_json() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(
        dir.path(),
        "printf 'name                : \"br1\"\\n\\nname                : \"br2\"\\n'",
    );

    let assert = ovs_query(&fake)
        .args(["--json", "list", "Bridge"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{"name": "br1"}, {"name": "br2"}])
    );
}

#[test]
fn test_get_value() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(dir.path(), "printf '100\\n'");

    ovs_query(&fake)
        .args(["get", "Port", "s1", "tag"])
        .assert()
        .success()
        .stdout("100\n");
}

#[test]
fn test_exec_argument_passthrough() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(dir.path(), "echo \"$@\"");

    ovs_query(&fake)
        .args(["exec", "list-br"])
        .assert()
        .success()
        .stdout("--db=tcp:127.0.0.1:6640 --format=list --data=string list-br\n");
}

#[test]
fn test_command_failure_surfaces_stderr() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(
        dir.path(),
        "echo 'ovs-vsctl: no row \"missing\" in table Bridge' >&2; exit 1",
    );

    ovs_query(&fake)
        .args(["list", "Bridge", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no row \"missing\""));
}

#[test]
fn test_invalid_db_addr_is_rejected() {
    let dir = TempDir::new().unwrap();
    let fake = fake_vsctl(dir.path(), "exit 0");

    ovs_query(&fake)
        .args(["--db-addr", "xxx.xxx.xxx.xxx", "list-br"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid IP address"));
}
