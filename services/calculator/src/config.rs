use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub banner: String,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            banner: "Type a space-separated expression".to_string(),
            prompt: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        let mut cfg = ::config::Config::new();
        cfg.merge(::config::Environment::new().prefix("APP").separator("_"))?;
        cfg.try_into()
    }
}
