use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wikicount_engine::{EngineConfig, FetchSettings, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use wikicount_logging::wc_info;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "wikicount.ron";

const DEFAULT_ARTICLES: [&str; 16] = [
    "আইজ্যাক অ্যাডেওল",
    "কৃত্রিম বুদ্ধিমত্তার দৃশ্যকলা",
    "আকিল আগা",
    "বুশি (অঞ্চল)",
    "সমারসেটের ভূগোল",
    "গারিবল্ডি আগ্নেয় বলয়",
    "ইডরেড",
    "ক্রোয়েশিয়া-সার্বিয়া সীমান্ত বিরোধ",
    "নেভাদাপ্লানো",
    "গেরেরো",
    "কেপ ইয়র্ক উপদ্বীপ",
    "রমনি ক্লাসিক্যাল ইনস্টিটিউট",
    "রেবেকা জোন্স",
    "হ্যালিফ্যাক্স বিস্ফোরণ",
    "এক্সপো ৬৭",
    "মাউন্ট এটনার অগ্ন্যুৎপাত, ১৬৬৯",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub delay_ms: u64,
    pub report_title: String,
    pub articles: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 15,
            connect_timeout_secs: 15,
            delay_ms: 500,
            report_title: "Article Word Count".to_string(),
            articles: DEFAULT_ARTICLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint is empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive".into(),
            ));
        }
        if self.articles.iter().all(|title| title.trim().is_empty()) {
            return Err(ConfigError::Invalid("article list is empty".into()));
        }
        Ok(())
    }

    /// Titles with surrounding whitespace trimmed and blanks dropped.
    pub fn titles(&self) -> Vec<String> {
        self.articles
            .iter()
            .map(|title| title.trim())
            .filter(|title| !title.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                endpoint: self.endpoint.clone(),
                user_agent: self.user_agent.clone(),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
            },
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

/// Loads `explicit` if given (it must exist), else `./wikicount.ron` if present,
/// else the built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if !fallback.is_file() {
                wc_info!("No {} found; using built-in defaults", DEFAULT_CONFIG_FILENAME);
                return Ok(AppConfig::default());
            }
            fallback
        }
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    wc_info!(
        "Loaded config from {:?} ({} articles)",
        path,
        config.articles.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::{load, load_from, AppConfig, ConfigError};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_bengali_wikipedia_run() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "https://bn.wikipedia.org/w/api.php");
        assert_eq!(config.articles.len(), 16);
        assert_eq!(config.articles[6], "ইডরেড");
        let engine = config.engine_config();
        assert_eq!(engine.fetch.request_timeout, Duration::from_secs(15));
        assert_eq!(engine.fetch.connect_timeout, Duration::from_secs(15));
        assert_eq!(engine.delay, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let file = write_config(r#"(delay_ms: 0, articles: ["Expo 67", "  "])"#);
        let config = load_from(file.path()).unwrap();

        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.titles(), vec!["Expo 67".to_string()]);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("(delay_ms: \"soon\")");
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(dir.path().join("absent.ron").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn validation_rejects_unusable_configs() {
        let empty = AppConfig {
            articles: vec![" ".to_string()],
            ..AppConfig::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::Invalid(_))));

        let no_timeout = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(matches!(no_timeout.validate(), Err(ConfigError::Invalid(_))));
    }
}
