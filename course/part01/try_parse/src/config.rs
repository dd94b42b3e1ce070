use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Inputs tried when nothing else is configured.
pub const DEFAULT_SAMPLES: [&str; 5] = ["456", "", "12.5", "-42", "99999999999999999999"];

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub samples: Vec<String>,
}

impl DemoConfig {
    /// Loads `try_parse.toml` from the working directory if there is one, then applies
    /// any `TRY_PARSE_*` environment variables, e.g. `TRY_PARSE_SAMPLES=1,x,-3`.
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("try_parse").required(false))
            .add_source(
                Environment::with_prefix("TRY_PARSE")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("samples"),
            )
            .build()?
            .try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    config::Config::builder().set_default(
        "samples",
        DEFAULT_SAMPLES
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    )
}
