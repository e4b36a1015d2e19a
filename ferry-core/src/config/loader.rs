//! TOML configuration loader
//!
//! Accepts a file of the form:
//!
//! ```toml
//! [data]
//! refresh_rate_ms = 5000
//! expected_ferries = 2
//!
//! [render]
//! interval_ms = 20
//! ```
//!
//! Missing keys and sections fall back to their defaults.

use super::types::{ConfigError, FerryConfig};

/// Parse and validate a clock configuration
pub fn parse_config(input: &str) -> Result<FerryConfig, ConfigError> {
    let config: FerryConfig = toml::from_str(input).map_err(|_e| {
        warn!("Config parse error");
        ConfigError::Parse
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataConfig, RenderConfig};

    #[test]
    fn test_parse_full() {
        let config = parse_config(
            r#"
            [data]
            refresh_rate_ms = 10000
            expected_ferries = 3

            [render]
            interval_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            FerryConfig {
                data: DataConfig {
                    refresh_rate_ms: 10000,
                    expected_ferries: 3,
                },
                render: RenderConfig { interval_ms: 50 },
            }
        );
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(parse_config(""), Ok(FerryConfig::default()));
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse_config("[data]\nrefresh_rate_ms = 2500\n").unwrap();
        assert_eq!(config.data.refresh_rate_ms, 2500);
        assert_eq!(config.data.expected_ferries, 2);
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        assert_eq!(
            parse_config("[data]\nrefresh_rate_ms = \"fast\"\n"),
            Err(ConfigError::Parse)
        );
    }

    #[test]
    fn test_parse_validates() {
        assert_eq!(
            parse_config("[data]\nrefresh_rate_ms = 0\n"),
            Err(ConfigError::ZeroRefreshRate)
        );
    }
}
