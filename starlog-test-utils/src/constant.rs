//! Test configuration constants for OAuth client setup.
//!
//! Placeholder values used across all tests; none of these are real
//! credentials.

/// Mock OAuth2 client ID for testing.
pub static TEST_OAUTH_CLIENT_ID: &str = "oauth_client_id";

/// Mock OAuth2 client secret for testing.
pub static TEST_OAUTH_CLIENT_SECRET: &str = "oauth_client_secret";

/// Mock OAuth2 callback URL for testing. Points to localhost.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";
