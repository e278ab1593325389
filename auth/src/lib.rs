//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the company service:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation (HS256, no clock leeway)
//! - Credential verification that does not reveal whether an account exists
//!
//! The service defines its own identity and role types and adapts these
//! implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("alice", Utc::now(), Duration::hours(1))
//!     .with_extra("roles", vec!["USER"]);
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("alice"));
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::{AuthenticationError, Authenticator};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify against the stored hash, or against nothing for an unknown user
//! assert!(auth.verify_credentials("password123", Some(&hash)).is_ok());
//! assert!(matches!(
//!     auth.verify_credentials("password123", None),
//!     Err(AuthenticationError::InvalidCredentials)
//! ));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
