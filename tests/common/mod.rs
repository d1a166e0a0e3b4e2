#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write config file");
    path
}

pub const VALID_YAML: &str = "\
rgb: false
color: blue
thickness: 2
font: hershey_duplex
scale: 0.75
pt_radius: 3
line_type: anti_aliased
fps: 25.0
fourcc: XVID
";

pub const INVALID_YAML: &str = "\
thickness: -4
scale: 0
color: not_a_color
";

pub const WARNING_ONLY_JSON: &str = r#"{
  "experimental": true
}"#;
