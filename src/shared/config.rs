// src/shared/config.rs
use std::env;

pub const DEFAULT_PAGE_SIZE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Local catcher such as Mailpit; no TLS, no credentials.
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHasherKind {
    Argon2,
    Bcrypt,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub site_url: String,
    pub page_size: u32,
    pub email_from: String,
    pub smtp: SmtpConfig,
    pub password_hasher: PasswordHasherKind,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = required("HOST")?;
        let port = parse_number::<u16>("PORT", &required("PORT")?)?;
        let database_url = required("DATABASE_URL")?;
        let redis_url = required("REDIS_URL")?;
        let site_url = lookup("SITE_URL")
            .unwrap_or_else(|| format!("http://{host}:{port}"))
            .trim_end_matches('/')
            .to_string();

        let page_size = match lookup("WORKOUTS_PAGE_SIZE") {
            Some(raw) => {
                let size = parse_number::<u32>("WORKOUTS_PAGE_SIZE", &raw)?;
                if size == 0 {
                    return Err(ConfigError::Invalid {
                        key: "WORKOUTS_PAGE_SIZE",
                        value: raw,
                    });
                }
                size
            }
            None => DEFAULT_PAGE_SIZE,
        };

        let email_from = required("EMAIL_FROM")?;
        let smtp = if environment == "test" {
            let smtp_host = lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string());
            let smtp_port = match lookup("SMTP_PORT") {
                Some(raw) => parse_number::<u16>("SMTP_PORT", &raw)?,
                None => 1025,
            };
            SmtpConfig::Local {
                host: smtp_host,
                port: smtp_port,
            }
        } else {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let password_hasher = match lookup("PASSWORD_HASHER").as_deref() {
            None | Some("argon2") => PasswordHasherKind::Argon2,
            Some("bcrypt") => PasswordHasherKind::Bcrypt,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PASSWORD_HASHER",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            environment,
            host,
            port,
            database_url,
            redis_url,
            site_url,
            page_size,
            email_from,
            smtp,
            password_hasher,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
