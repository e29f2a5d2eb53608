use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

use lexp_providers::ProviderEndpoints;

pub struct Config {
    pub port: u16,
    pub auth_url: String,
    pub search_endpoints: ProviderEndpoints,
    pub search_key: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("LEXP_PORT", "1111"),
            auth_url: try_load("AUTH_URL", "http://auth:9999/auth/v1"),
            search_endpoints: ProviderEndpoints {
                linkedin: try_load("LINKEDIN_SEARCH_URL", "http://search:8000/linkedin"),
                instagram: try_load("INSTAGRAM_SEARCH_URL", "http://search:8000/instagram"),
                facebook: try_load("FACEBOOK_SEARCH_URL", "http://search:8000/facebook"),
                twitter: try_load("TWITTER_SEARCH_URL", "http://search:8000/twitter"),
            },
            search_key: read_secret("SEARCH_API_KEY"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .expect("Secrets misconfigured!")
}
