use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means announcements live in memory only.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub app_base_url: String,
    /// Usernames seeded into the in-memory teacher directory.
    pub dev_teachers: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".into())
                .parse()?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost".into()),
            dev_teachers: env::var("DEV_TEACHERS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_skips_blank_entries() {
        assert_eq!(
            parse_list(" mrodriguez, ,mchen,"),
            vec!["mrodriguez".to_string(), "mchen".to_string()]
        );
        assert!(parse_list("").is_empty());
    }
}
