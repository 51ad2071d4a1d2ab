pub mod github;
pub mod jwt;

pub use github::{GithubOAuth, GithubUser};
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
