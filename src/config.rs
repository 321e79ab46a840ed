use std::env;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "Uthra";

/// Connection settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub uri: String,
    pub database: String,
}

impl Config {
    /// Read settings from the environment, falling back to local defaults.
    /// Credentials, if any, travel inside MONGODB_URI.
    pub fn from_env() -> Self {
        let uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        let database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Self { uri, database }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults_and_overrides() {
        // Both branches in one test so the env mutations cannot race.
        unsafe {
            env::remove_var("MONGODB_URI");
            env::remove_var("MONGODB_DATABASE");
        }
        let config = Config::from_env();
        assert_eq!(config.uri, DEFAULT_URI);
        assert_eq!(config.database, DEFAULT_DATABASE);

        unsafe {
            env::set_var("MONGODB_URI", "mongodb://db.example.com:27017");
            env::set_var("MONGODB_DATABASE", "UthraTest");
        }
        let config = Config::from_env();
        assert_eq!(config.uri, "mongodb://db.example.com:27017");
        assert_eq!(config.database, "UthraTest");

        unsafe {
            env::remove_var("MONGODB_URI");
            env::remove_var("MONGODB_DATABASE");
        }
    }
}
