use crate::error::{Result, WordbookError};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ENV_API_KEY: &str = "WORDBOOK_GEMINI_API_KEY";
pub const ENV_MODEL: &str = "WORDBOOK_GEMINI_MODEL";
pub const ENV_NOTEBOOK_FILE: &str = "WORDBOOK_NOTEBOOK_FILE";
pub const ENV_GIT_REMOTE_URL: &str = "WORDBOOK_GIT_REMOTE_URL";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_NOTEBOOK_FILE: &str = "wordbook.md";

const ENV_FILENAME: &str = "wordbook.env";

/// Configuration resolved once at startup and passed into the API constructor.
///
/// Sources, highest priority first: process environment variables, then the
/// saved environment file under the platform config directory. `init` writes
/// that file; nothing here is ever held as global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordbookConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub notebook_file: PathBuf,
    pub git_remote_url: Option<String>,
}

impl WordbookConfig {
    /// Load configuration, requiring the API key to be present.
    pub fn load() -> Result<Self> {
        let config = Self::load_lenient()?;
        if config.gemini_api_key.is_empty() {
            return Err(WordbookError::Config(format!(
                "{} is not set. Run 'wordbook init' to configure it, or export it in your environment.",
                ENV_API_KEY
            )));
        }
        Ok(config)
    }

    /// Load configuration without insisting on an API key. Used by `init` to
    /// seed prompts with current values and by `info` to show paths.
    pub fn load_lenient() -> Result<Self> {
        let mut vars = match fs::read_to_string(Self::env_file_path()?) {
            Ok(content) => parse_env_file(&content),
            Err(_) => HashMap::new(),
        };
        for key in [ENV_API_KEY, ENV_MODEL, ENV_NOTEBOOK_FILE, ENV_GIT_REMOTE_URL] {
            if let Ok(value) = env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }
        Ok(Self::resolve(&vars))
    }

    fn resolve(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            gemini_api_key: get(ENV_API_KEY).unwrap_or_default(),
            gemini_model: get(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            notebook_file: PathBuf::from(
                get(ENV_NOTEBOOK_FILE).unwrap_or_else(|| DEFAULT_NOTEBOOK_FILE.to_string()),
            ),
            git_remote_url: get(ENV_GIT_REMOTE_URL),
        }
    }

    /// Write the environment file, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::env_file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.render_env_file())?;
        Ok(())
    }

    pub fn env_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "wordbook", "wordbook").ok_or_else(|| {
            WordbookError::Config("could not determine the config directory".to_string())
        })?;
        Ok(dirs.config_dir().join(ENV_FILENAME))
    }

    fn render_env_file(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}={}\n", ENV_API_KEY, self.gemini_api_key));
        out.push_str(&format!("{}={}\n", ENV_MODEL, self.gemini_model));
        out.push_str(&format!(
            "{}={}\n",
            ENV_NOTEBOOK_FILE,
            self.notebook_file.display()
        ));
        if let Some(url) = &self.git_remote_url {
            out.push_str(&format!("{}={}\n", ENV_GIT_REMOTE_URL, url));
        }
        out
    }
}

/// Parse `KEY=VALUE` lines; blank lines and `#` comments are ignored.
fn parse_env_file(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolve_applies_defaults() {
        let config = WordbookConfig::resolve(&vars(&[(ENV_API_KEY, "key-123")]));
        assert_eq!(config.gemini_api_key, "key-123");
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.notebook_file, PathBuf::from(DEFAULT_NOTEBOOK_FILE));
        assert_eq!(config.git_remote_url, None);
    }

    #[test]
    fn resolve_honors_overrides() {
        let config = WordbookConfig::resolve(&vars(&[
            (ENV_API_KEY, "key-123"),
            (ENV_MODEL, "gemini-1.5-pro"),
            (ENV_NOTEBOOK_FILE, "/tmp/words.md"),
            (ENV_GIT_REMOTE_URL, "git@example.com:me/words.git"),
        ]));
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.notebook_file, PathBuf::from("/tmp/words.md"));
        assert_eq!(
            config.git_remote_url.as_deref(),
            Some("git@example.com:me/words.git")
        );
    }

    #[test]
    fn resolve_treats_empty_values_as_unset() {
        let config = WordbookConfig::resolve(&vars(&[
            (ENV_API_KEY, "key-123"),
            (ENV_GIT_REMOTE_URL, "   "),
        ]));
        assert_eq!(config.git_remote_url, None);
    }

    #[test]
    fn parse_env_file_skips_comments_and_blanks() {
        let parsed = parse_env_file("# comment\n\nFOO=bar\n  BAZ = qux \n");
        assert_eq!(parsed.get("FOO").map(String::as_str), Some("bar"));
        assert_eq!(parsed.get("BAZ").map(String::as_str), Some("qux"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn env_file_roundtrip() {
        let config = WordbookConfig {
            gemini_api_key: "key-123".to_string(),
            gemini_model: "gemini-1.5-pro".to_string(),
            notebook_file: PathBuf::from("words.md"),
            git_remote_url: Some("git@example.com:me/words.git".to_string()),
        };
        let rendered = config.render_env_file();
        let reparsed = WordbookConfig::resolve(&parse_env_file(&rendered));
        assert_eq!(config, reparsed);
    }

    #[test]
    fn render_omits_absent_remote() {
        let config = WordbookConfig {
            gemini_api_key: "key-123".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            notebook_file: PathBuf::from(DEFAULT_NOTEBOOK_FILE),
            git_remote_url: None,
        };
        assert!(!config.render_env_file().contains(ENV_GIT_REMOTE_URL));
    }
}
