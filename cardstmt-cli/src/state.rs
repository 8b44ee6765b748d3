use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CARDSTMT_HOME`, or `~/.cardstmt` when unset.
pub fn cardstmt_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CARDSTMT_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cardstmt"))
}

pub fn ensure_cardstmt_home() -> Result<PathBuf> {
    let dir = cardstmt_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
