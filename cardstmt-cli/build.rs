//! Stamps the source revision into `cardstmt --version`.
//!
//! The revision is `git describe` output, so a build from a tagged commit
//! reads `v0.1.0`, later commits `v0.1.0-3-g1a2b3c4d5e`, and a tree with
//! uncommitted edits gets a `-modified` suffix. Outside a checkout it is
//! `unknown`.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

fn git(workspace: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(workspace).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let workspace = manifest_dir.join("..");

    // Rebuild when HEAD moves or the index changes, not on every edit.
    for tracked in [".git/HEAD", ".git/index"] {
        let path = workspace.join(tracked);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
    println!("cargo:rerun-if-changed=build.rs");

    let revision = git(
        &workspace,
        &["describe", "--always", "--tags", "--abbrev=10", "--dirty=-modified"],
    )
    .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CARDSTMT_BUILD_REV={revision}");
}
