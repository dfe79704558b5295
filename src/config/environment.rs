//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use anyhow::{Context, Result};

use crate::services::DEFAULT_SESSION_TTL_MINUTES;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub catalog_path: String,
    pub cors_origins: Vec<String>,
    pub session_ttl_minutes: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            catalog_path: "data/booking_data.json".to_string(),
            cors_origins: Vec::new(),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            Err(_) => defaults.port,
        };

        let session_ttl_minutes = match env::var("SESSION_TTL_MINUTES") {
            Ok(raw) => parse_ttl_minutes(&raw)?,
            Err(_) => defaults.session_ttl_minutes,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            catalog_path: env::var("CATALOG_PATH").unwrap_or(defaults.catalog_path),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            session_ttl_minutes,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Nivel de log según el entorno
    pub fn log_level(&self) -> tracing::Level {
        if self.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Tiempo de vida de una sesión inactiva
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.session_ttl_minutes))
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_ttl_minutes(raw: &str) -> Result<u32> {
    let minutes: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("SESSION_TTL_MINUTES must be a valid number, got '{}'", raw))?;
    if minutes == 0 {
        anyhow::bail!("SESSION_TTL_MINUTES must be greater than zero");
    }
    Ok(minutes)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.session_ttl(), chrono::Duration::minutes(30));

        let production = EnvironmentConfig {
            environment: "production".to_string(),
            ..EnvironmentConfig::default()
        };
        assert_eq!(production.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_parse_ttl_minutes() {
        assert_eq!(parse_ttl_minutes(" 45 ").unwrap(), 45);
        assert!(parse_ttl_minutes("0").is_err());
        assert!(parse_ttl_minutes("soon").is_err());
    }
}
