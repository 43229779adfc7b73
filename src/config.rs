use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub columns: ColumnsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            path: None,
            url: None,
            timeout_secs: None,
        }
    }
}

fn default_source() -> String {
    "builtin".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_path")]
    pub path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("./data/favorites.json")
}

/// Header names of the roster CSV. Matched by exact string equality.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnsConfig {
    pub name: String,
    pub organization: String,
    pub title: String,
    pub fields: String,
    pub description: String,
    pub support_types: String,
    pub region: String,
    pub email: String,
    pub phone: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            name: "名前".to_string(),
            organization: "所属".to_string(),
            title: "役職".to_string(),
            fields: "分野".to_string(),
            description: "自己紹介".to_string(),
            support_types: "サポート内容".to_string(),
            region: "活動地域".to_string(),
            email: "メールアドレス".to_string(),
            phone: "電話番号".to_string(),
        }
    }
}

impl ColumnsConfig {
    fn all(&self) -> [(&'static str, &str); 9] {
        [
            ("name", self.name.as_str()),
            ("organization", self.organization.as_str()),
            ("title", self.title.as_str()),
            ("fields", self.fields.as_str()),
            ("description", self.description.as_str()),
            ("support_types", self.support_types.as_str()),
            ("region", self.region.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }
}

impl Config {
    /// Config used when no file is present: embedded roster, default
    /// favorites location.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(Config::minimal());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content)?;
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    match config.roster.source.as_str() {
        "builtin" => {}
        "file" => {
            if config.roster.path.is_none() {
                bail!("roster.path must be specified when source is 'file'");
            }
        }
        "http" => {
            let raw = match &config.roster.url {
                Some(u) => u,
                None => bail!("roster.url must be specified when source is 'http'"),
            };
            url::Url::parse(raw).with_context(|| format!("roster.url is not a valid URL: {}", raw))?;
        }
        other => bail!(
            "Unknown roster source: '{}'. Must be builtin, file, or http.",
            other
        ),
    }

    if config.roster.timeout_secs == Some(0) {
        bail!("roster.timeout_secs must be > 0");
    }

    let mut seen = HashSet::new();
    for (key, header) in config.columns.all() {
        if header.is_empty() {
            bail!("columns.{} must not be empty", key);
        }
        if !seen.insert(header) {
            bail!("columns.{} duplicates another column name: '{}'", key, header);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.roster.source, "builtin");
        assert_eq!(cfg.favorites.path, PathBuf::from("./data/favorites.json"));
        assert_eq!(cfg.columns, ColumnsConfig::default());
    }

    #[test]
    fn test_partial_columns_keep_other_defaults() {
        let cfg = parse_config("[columns]\nname = \"Name\"\n").unwrap();
        assert_eq!(cfg.columns.name, "Name");
        assert_eq!(cfg.columns.organization, "所属");
    }

    #[test]
    fn test_http_requires_url() {
        let err = parse_config("[roster]\nsource = \"http\"\n").unwrap_err();
        assert!(err.to_string().contains("roster.url"));
    }

    #[test]
    fn test_http_rejects_bad_url() {
        let err = parse_config("[roster]\nsource = \"http\"\nurl = \"not a url\"\n").unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_file_requires_path() {
        let err = parse_config("[roster]\nsource = \"file\"\n").unwrap_err();
        assert!(err.to_string().contains("roster.path"));
    }

    #[test]
    fn test_unknown_source() {
        let err = parse_config("[roster]\nsource = \"ftp\"\n").unwrap_err();
        assert!(err.to_string().contains("Unknown roster source"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let toml = "[roster]\nsource = \"http\"\nurl = \"http://localhost/m.csv\"\ntimeout_secs = 0\n";
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = parse_config("[columns]\nname = \"x\"\ntitle = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("duplicates"));
    }

    #[test]
    fn test_missing_file_is_minimal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cfg = load_config(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.roster.source, "builtin");
    }
}
