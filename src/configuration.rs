use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_HOST: &str = "https://code.google.com";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub host_from_log_name: bool,
    pub sort_fallback: SortFallback,
}

/// What to do with a URL that has no `/p-<word>-<word>` segment when the
/// log as a whole switched to ordering by that segment.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortFallback {
    /// Use the whole URL as the sort key.
    #[default]
    FullUrl,
    /// Abort the scan.
    Fail,
}

impl Settings {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("host_from_log_name", false)?
            .set_default("sort_fallback", "full_url")?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix("LOGPUZZLE"))
            .build()?;
        let settings: Settings = builder.try_deserialize()?;

        if let Err(e) = Url::parse(&settings.host) {
            return Err(ConfigError::Message(format!(
                "host \"{}\" is not an absolute URL: {}",
                settings.host, e
            )));
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            host_from_log_name: false,
            sort_fallback: SortFallback::default(),
        }
    }
}
