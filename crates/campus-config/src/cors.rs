use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| Self::parse_origins(&origins))
            .unwrap_or_else(|_| Self::parse_origins("http://localhost:3000,http://localhost:5173"));

        Self { allowed_origins }
    }

    fn parse_origins(origins: &str) -> Vec<String> {
        origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = CorsConfig::parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
