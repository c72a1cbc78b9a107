//! Stamps the binary with the commit and build date shown by `--version`.
//!
//! `BUILD_COMMIT` and `BUILD_DATE` override both, for release builds made
//! outside a git checkout.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}

fn build_commit() -> String {
    env::var("BUILD_COMMIT")
        .ok()
        .or_else(git_commit)
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().date_naive().to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = PathBuf::from(env::var("OUT_DIR")?).join("build_info.rs");
    let source = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        build_commit(),
        build_date(),
    );
    fs::write(out, source)?;

    for line in [
        "rerun-if-changed=.git/HEAD",
        "rerun-if-env-changed=BUILD_COMMIT",
        "rerun-if-env-changed=BUILD_DATE",
    ] {
        println!("cargo:{line}");
    }
    Ok(())
}
