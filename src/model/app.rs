use oauth2::basic::BasicClient;
use oauth2::{EndpointNotSet, EndpointSet};
use sea_orm::DatabaseConnection;

/// Fully configured OAuth2 client: auth, token, and redirect endpoints set.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub oauth: OAuthClient,
    pub http: reqwest::Client,
    /// Userinfo endpoint of the OAuth provider, queried with the bearer
    /// token obtained from the code exchange.
    pub userinfo_url: String,
}

// Tuple conversion keeps the test-utils crate free of a dependency on this
// crate.
impl From<(DatabaseConnection, OAuthClient, reqwest::Client, String)> for AppState {
    fn from(
        (db, oauth, http, userinfo_url): (DatabaseConnection, OAuthClient, reqwest::Client, String),
    ) -> Self {
        Self {
            db,
            oauth,
            http,
            userinfo_url,
        }
    }
}
