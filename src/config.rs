use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// HMAC key for signing session tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Token lifetime in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,

    /// bcrypt work factor.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_jwt_secret() -> String {
    "fallback-secret-key".into()
}

fn default_token_ttl_secs() -> i64 {
    60 * 60 * 24
}

fn default_bcrypt_cost() -> u32 {
    10
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Self>().unwrap();

        config
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| Config::from_env())
}

#[cfg(test)]
pub fn config_override<F>(override_config: F) -> &'static Config
where
    F: FnOnce(Config) -> Config,
{
    CONFIG.get_or_init(|| override_config(Config::from_env()))
}
