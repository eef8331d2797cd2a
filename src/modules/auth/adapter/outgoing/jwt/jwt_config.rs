use std::env;

use crate::shared::config::ConfigError;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,     // Expiration in seconds
    pub activation_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: format!("{} characters", secret_key.len()),
            });
        }

        let access_token_expiry = parse_expiry(&lookup, "JWT_ACCESS_EXPIRY", 1800)?;
        let activation_token_expiry = parse_expiry(&lookup, "JWT_ACTIVATION_EXPIRY", 259_200)?;

        if access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "workout_tracker".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            activation_token_expiry,
        })
    }
}

fn parse_expiry<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<i64>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: HashMap<&'static str, &'static str>) -> Result<JwtConfig, ConfigError> {
        JwtConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn applies_defaults() {
        let config = load(hashmap! { "JWT_SECRET" => SECRET }).unwrap();

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.activation_token_expiry, 259_200);
        assert_eq!(config.issuer, "workout_tracker");
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert_eq!(
            load(HashMap::new()).unwrap_err(),
            ConfigError::Missing("JWT_SECRET")
        );
    }

    #[test]
    fn short_secret_is_rejected() {
        let result = load(hashmap! { "JWT_SECRET" => "too-short" });

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_expiry_is_rejected() {
        let result = load(hashmap! {
            "JWT_SECRET" => SECRET,
            "JWT_ACTIVATION_EXPIRY" => "0",
        });

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "JWT_ACTIVATION_EXPIRY",
                ..
            })
        ));
    }

    #[test]
    fn access_expiry_is_capped_at_one_day() {
        let result = load(hashmap! {
            "JWT_SECRET" => SECRET,
            "JWT_ACCESS_EXPIRY" => "90000",
        });

        assert!(result.is_err());
    }
}
