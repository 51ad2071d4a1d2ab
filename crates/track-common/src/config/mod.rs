pub mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, GithubConfig,
    InviteConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
