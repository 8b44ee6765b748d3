use anyhow::{bail, Context, Result};
use cardstmt_core::NumberFormat;
use cardstmt_ingest::types::DEFAULT_BLOCK_MARKER;
use cardstmt_ingest::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{cardstmt_home, ensure_cardstmt_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// Text that opens the transaction block (case-sensitive substring)
    pub block_marker: String,
    pub show_rewards: bool,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: PathBuf,
}

impl Default for ParserSection {
    fn default() -> Self {
        let format = NumberFormat::default();
        Self {
            block_marker: DEFAULT_BLOCK_MARKER.to_string(),
            show_rewards: true,
            decimal_separator: format.decimal_separator,
            thousands_separator: format.thousands_separator,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.csv"),
        }
    }
}

impl Config {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.parser.decimal_separator, self.parser.thousands_separator)
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        let number_format = self.number_format();
        if !number_format.is_valid() {
            bail!(
                "invalid number format: decimal separator {:?}, thousands separator {:?}",
                number_format.decimal_separator,
                number_format.thousands_separator
            );
        }
        if self.parser.block_marker.is_empty() {
            bail!("block_marker must not be empty");
        }
        Ok(ScanOptions {
            block_marker: self.parser.block_marker.clone(),
            number_format,
            show_rewards: self.parser.show_rewards,
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(cardstmt_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_cardstmt_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config()?;
    if p.exists() {
        println!("# {}", p.display());
    } else {
        println!("# {} (not found, showing defaults)", p.display());
    }
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(s.contains("block_marker = \"Transactions\""));
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[parser]
show_rewards = false
decimal_separator = ","
thousands_separator = "."
"#,
        )
        .unwrap();
        assert!(!cfg.parser.show_rewards);
        assert_eq!(cfg.parser.block_marker, "Transactions");
        assert_eq!(cfg.output.path, PathBuf::from("output.csv"));

        let options = cfg.scan_options().unwrap();
        assert_eq!(options.number_format, NumberFormat::new(',', '.'));
    }

    #[test]
    fn test_rejects_clashing_separators() {
        let mut cfg = Config::default();
        cfg.parser.thousands_separator = '.';
        assert!(cfg.scan_options().is_err());
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
