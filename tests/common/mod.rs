use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn devj_cmd() -> Command {
    let mut cmd = Command::cargo_bin("devj").unwrap();
    cmd.env_remove("DEVJ_ROOT");
    cmd.env_remove("DEVJ_LOG");
    cmd.env_remove("DEVJ_URL");
    cmd.env_remove("DEVJ_USER");
    cmd.env_remove("DEVJ_PASSWORD");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Write `<root>/<name>/<name>.md`
#[allow(dead_code)]
pub fn write_entry(root: &Path, name: &str, content: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.md", name)), content).unwrap();
}
