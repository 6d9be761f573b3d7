use std::env;
use std::time::Duration;

use chrono::FixedOffset;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub listings_api: ListingsApiConfig,
    pub feed: FeedConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Upstream backend that owns the listing collections
#[derive(Debug, Clone)]
pub struct ListingsApiConfig {
    /// Base URL of the backend, without trailing slash
    pub base_url: String,
    /// Path returning listings flagged TOP with a transaction id
    pub top_path: String,
    /// Path returning unpaid, non-pending, non-rejected listings
    pub not_top_path: String,
    pub timeout: Duration,
}

/// Timers and clock used by the placement feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub refresh_interval: Duration,
    pub rotation_interval: Duration,
    /// Offset of the marketplace's local time from UTC
    pub utc_offset: FixedOffset,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            listings_api: ListingsApiConfig::from_env()?,
            feed: FeedConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ListingsApiConfig {
    const DEFAULT_TOP_PATH: &'static str = "/api/publications/top";
    const DEFAULT_NOT_TOP_PATH: &'static str = "/api/publications/notop";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("LISTINGS_API_URL")
            .map_err(|_| "LISTINGS_API_URL environment variable is required".to_string())?
            .trim_end_matches('/')
            .to_string();

        let top_path =
            env::var("LISTINGS_TOP_PATH").unwrap_or_else(|_| Self::DEFAULT_TOP_PATH.to_string());

        let not_top_path = env::var("LISTINGS_NOTOP_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_NOT_TOP_PATH.to_string());

        let timeout_secs = env::var("LISTINGS_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "LISTINGS_API_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            top_path,
            not_top_path,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn top_url(&self) -> String {
        format!("{}{}", self.base_url, self.top_path)
    }

    pub fn not_top_url(&self) -> String {
        format!("{}{}", self.base_url, self.not_top_path)
    }
}

impl FeedConfig {
    const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
    const DEFAULT_ROTATION_INTERVAL_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let refresh_secs = env::var("FEED_REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REFRESH_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FEED_REFRESH_INTERVAL_SECS must be a valid number".to_string())?;

        let rotation_secs = env::var("FEED_ROTATION_INTERVAL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ROTATION_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FEED_ROTATION_INTERVAL_SECS must be a valid number".to_string())?;

        if refresh_secs == 0 || rotation_secs == 0 {
            return Err("Feed intervals must be greater than zero".to_string());
        }

        let offset_minutes = env::var("PLACEMENT_UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<i32>()
            .map_err(|_| "PLACEMENT_UTC_OFFSET_MINUTES must be a valid number".to_string())?;

        Ok(Self {
            refresh_interval: Duration::from_secs(refresh_secs),
            rotation_interval: Duration::from_secs(rotation_secs),
            utc_offset: Self::parse_offset(offset_minutes)?,
        })
    }

    fn parse_offset(minutes: i32) -> Result<FixedOffset, String> {
        if !(-1439..=1439).contains(&minutes) {
            return Err("PLACEMENT_UTC_OFFSET_MINUTES must be within -1439..=1439".to_string());
        }

        FixedOffset::east_opt(minutes * 60)
            .ok_or_else(|| format!("Invalid UTC offset: {} minutes", minutes))
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Classifieds Core API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Placement feed for TOP and NOTOP listings".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_in_range() {
        let offset = FeedConfig::parse_offset(-300).unwrap();
        assert_eq!(offset.local_minus_utc(), -300 * 60);
    }

    #[test]
    fn test_parse_offset_out_of_range() {
        assert!(FeedConfig::parse_offset(1440).is_err());
        assert!(FeedConfig::parse_offset(-1440).is_err());
    }

    #[test]
    fn test_listings_urls() {
        let config = ListingsApiConfig {
            base_url: "http://backend:4000".to_string(),
            top_path: "/api/publications/top".to_string(),
            not_top_path: "/api/publications/notop".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(config.top_url(), "http://backend:4000/api/publications/top");
        assert_eq!(
            config.not_top_url(),
            "http://backend:4000/api/publications/notop"
        );
    }

    #[test]
    fn test_swagger_credentials() {
        let mut config = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(config.credentials(), None);

        config.password = Some("secret".to_string());
        assert_eq!(config.credentials(), Some("admin:secret".to_string()));
    }
}
