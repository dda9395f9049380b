use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn xochitl_tools() -> Command {
    let mut cmd = cargo_bin_cmd!("xochitl-tools");
    // Keep the developer's environment from leaking into store resolution.
    cmd.env_remove("XOCHITL_DIR");
    cmd
}

#[allow(dead_code)]
pub fn write_doc(dir: &Path, id: &str, name: &str, parent: &str, deleted: bool) {
    let raw = format!(
        r#"{{"visibleName":"{}","type":"DocumentType","deleted":{},"parent":"{}"}}"#,
        name, deleted, parent
    );
    fs::write(dir.join(format!("{}.metadata", id)), raw).unwrap();
}

#[allow(dead_code)]
pub fn write_folder(dir: &Path, id: &str, name: &str, parent: &str) {
    let raw = format!(
        r#"{{"visibleName":"{}","type":"CollectionType","deleted":false,"parent":"{}"}}"#,
        name, parent
    );
    fs::write(dir.join(format!("{}.metadata", id)), raw).unwrap();
}

#[allow(dead_code)]
pub fn write_content(dir: &Path, id: &str, raw: &str) {
    fs::write(dir.join(format!("{}.content", id)), raw).unwrap();
}
