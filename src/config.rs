//! Configuration for the index client.
//!
//! Connection settings are grouped into named environments selected by the
//! `APP_ENV` variable, with per-field overrides from the environment. The
//! resulting `ClientConfig` is immutable and owned by the client instance;
//! there is no ambient global configuration.

use std::env;

/// Environment variable naming the active environment.
const ENV_VAR_NAME: &str = "APP_ENV";

/// Default hostname for the search index service.
const DEFAULT_HOST: &str = "localhost";

/// Default port for the search index service.
const DEFAULT_PORT: u16 = 9200;

/// Wire protocol used to reach the search index service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// URL scheme for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// Parse a scheme name, falling back to `Http` on anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "https" => Protocol::Https,
            _ => Protocol::Http,
        }
    }
}

/// Credentials for HTTP Basic authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Named deployment environments with preset connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    /// Parse an environment name, case-insensitively.
    ///
    /// Unknown or empty names fall back to `Staging`, matching the default
    /// applied when no environment is configured at all.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Staging,
        }
    }

    /// Read the active environment from `APP_ENV`.
    pub fn from_env() -> Self {
        env::var(ENV_VAR_NAME)
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Staging)
    }
}

/// Connection settings for the search index service.
///
/// Read on every request to build the base URL and auth header; never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Wire protocol (plain or TLS).
    pub protocol: Protocol,
    /// Hostname of the search index service.
    pub hostname: String,
    /// Port of the search index service.
    pub port: u16,
    /// Optional HTTP Basic credentials.
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Staging)
    }
}

impl ClientConfig {
    /// Preset configuration for a named environment.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Staging => Self {
                protocol: Protocol::Http,
                hostname: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                credentials: None,
            },
            Environment::Production => Self {
                protocol: Protocol::Https,
                hostname: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                credentials: None,
            },
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// The preset is selected by `APP_ENV`, then individual fields are
    /// overridden by `SEARCH_INDEX_PROTOCOL`, `SEARCH_INDEX_HOST`,
    /// `SEARCH_INDEX_PORT`, `SEARCH_INDEX_USERNAME` and
    /// `SEARCH_INDEX_PASSWORD` when set. Unparseable values keep the preset.
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());

        if let Ok(protocol) = env::var("SEARCH_INDEX_PROTOCOL") {
            config.protocol = Protocol::from_name(&protocol);
        }
        if let Ok(hostname) = env::var("SEARCH_INDEX_HOST") {
            config.hostname = hostname;
        }
        if let Ok(port) = env::var("SEARCH_INDEX_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            }
        }
        if let (Ok(username), Ok(password)) = (
            env::var("SEARCH_INDEX_USERNAME"),
            env::var("SEARCH_INDEX_PASSWORD"),
        ) {
            config.credentials = Some(Credentials::new(username, password));
        }

        config
    }

    /// Replace the credentials on this configuration.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Base URL for the configured service, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.protocol.scheme(),
            self.hostname,
            self.port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::from_name("staging"), Environment::Staging);
    }

    #[test]
    fn test_environment_from_name_falls_back_to_staging() {
        assert_eq!(Environment::from_name(""), Environment::Staging);
        assert_eq!(Environment::from_name("qa"), Environment::Staging);
    }

    #[test]
    fn test_protocol_from_name() {
        assert_eq!(Protocol::from_name("https"), Protocol::Https);
        assert_eq!(Protocol::from_name("http"), Protocol::Http);
        assert_eq!(Protocol::from_name("gopher"), Protocol::Http);
    }

    #[test]
    fn test_staging_preset() {
        let config = ClientConfig::for_environment(Environment::Staging);
        assert_eq!(config.protocol, Protocol::Http);
        assert_eq!(config.port, 9200);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_production_preset_uses_tls() {
        let config = ClientConfig::for_environment(Environment::Production);
        assert_eq!(config.protocol, Protocol::Https);
    }

    #[test]
    fn test_base_url() {
        let config = ClientConfig {
            protocol: Protocol::Http,
            hostname: "search.internal".to_string(),
            port: 9201,
            credentials: None,
        };
        assert_eq!(config.base_url(), "http://search.internal:9201");
    }

    #[test]
    fn test_base_url_omits_credentials() {
        let config = ClientConfig::default()
            .with_credentials(Credentials::new("elastic", "changeme"));
        assert!(!config.base_url().contains("elastic"));
    }

    #[test]
    fn test_default_is_staging() {
        assert_eq!(
            ClientConfig::default(),
            ClientConfig::for_environment(Environment::Staging)
        );
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Every from_env assertion lives in this one test; tests run in
        // parallel and must not race on the process environment.
        let vars = [
            ENV_VAR_NAME,
            "SEARCH_INDEX_PROTOCOL",
            "SEARCH_INDEX_HOST",
            "SEARCH_INDEX_PORT",
            "SEARCH_INDEX_USERNAME",
            "SEARCH_INDEX_PASSWORD",
        ];
        for var in vars {
            env::remove_var(var);
        }

        // Unknown environment name falls back to the staging preset.
        env::set_var(ENV_VAR_NAME, "qa");
        assert_eq!(
            ClientConfig::from_env(),
            ClientConfig::for_environment(Environment::Staging)
        );

        // Field overrides are applied on top of the preset.
        env::set_var("SEARCH_INDEX_PROTOCOL", "https");
        env::set_var("SEARCH_INDEX_HOST", "search.internal");
        env::set_var("SEARCH_INDEX_PORT", "9201");
        let config = ClientConfig::from_env();
        assert_eq!(config.protocol, Protocol::Https);
        assert_eq!(config.hostname, "search.internal");
        assert_eq!(config.port, 9201);

        // An unparseable port keeps the preset value.
        env::set_var("SEARCH_INDEX_PORT", "abc");
        assert_eq!(ClientConfig::from_env().port, DEFAULT_PORT);

        // A username without a password does not produce credentials.
        env::set_var("SEARCH_INDEX_USERNAME", "elastic");
        assert!(ClientConfig::from_env().credentials.is_none());

        env::set_var("SEARCH_INDEX_PASSWORD", "changeme");
        assert_eq!(
            ClientConfig::from_env().credentials,
            Some(Credentials::new("elastic", "changeme"))
        );

        // The environment variable selects the production preset.
        for var in vars {
            env::remove_var(var);
        }
        env::set_var(ENV_VAR_NAME, "production");
        assert_eq!(
            ClientConfig::from_env(),
            ClientConfig::for_environment(Environment::Production)
        );

        env::remove_var(ENV_VAR_NAME);
    }
}
