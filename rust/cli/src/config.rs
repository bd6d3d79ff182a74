use serde::{Deserialize, Serialize};
use showdown_engine::deck::MAX_DECKS;
use showdown_engine::parse::DuplicatePolicy;
use std::fs;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const DUPLICATES_ENV: &str = "SHOWDOWN_DUPLICATES";
pub const DECKS_ENV: &str = "SHOWDOWN_DECKS";
pub const SEED_ENV: &str = "SHOWDOWN_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub duplicates: DuplicatePolicy,
    pub decks: u8,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub duplicates: ValueSource,
    pub decks: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            duplicates: ValueSource::Default,
            decks: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Allow,
            decks: 1,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration from defaults, the file named by
/// `SHOWDOWN_CONFIG`, then `SHOWDOWN_*` variables, later sources winning.
/// `env` looks up a variable by name.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.duplicates {
            cfg.duplicates = v;
            sources.duplicates = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(dup) = env(DUPLICATES_ENV)
        && !dup.is_empty()
    {
        cfg.duplicates = parse_duplicates(&dup)
            .ok_or_else(|| ConfigError::Invalid("Invalid duplicates policy".into()))?;
        sources.duplicates = ValueSource::Env;
    }
    if let Some(decks) = env(DECKS_ENV)
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Some(seed) = env(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    duplicates: Option<DuplicatePolicy>,
    #[serde(default)]
    decks: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 || cfg.decks > MAX_DECKS {
        return Err(ConfigError::Invalid(format!(
            "decks must be between 1 and {}",
            MAX_DECKS
        )));
    }
    Ok(())
}

fn parse_duplicates(s: &str) -> Option<DuplicatePolicy> {
    match s.to_ascii_lowercase().as_str() {
        "allow" => Some(DuplicatePolicy::Allow),
        "reject" => Some(DuplicatePolicy::Reject),
        _ => None,
    }
}
