use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: port
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config =
            Config::from_vars(Some("0.0.0.0".to_string()), Some("9000".to_string())).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_vars(None, Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        assert!(Config::from_vars(None, Some("70000".to_string())).is_err());
    }
}
