use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl,
    TokenUrl,
};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_CALLBACK_URL, TEST_OAUTH_CLIENT_ID, TEST_OAUTH_CLIENT_SECRET},
    error::TestError,
};

/// Fully configured OAuth2 client (authorize + token endpoints set).
///
/// Must stay in sync with the alias of the same name in the main crate so
/// that `TestSetup::state` can convert into the application's `AppState`.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub oauth: OAuthClient,
    pub http: reqwest::Client,
    pub userinfo_url: String,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Convert the test state into any type constructible from its fields.
    /// This allows conversion to the application's `AppState` without a
    /// circular crate dependency.
    pub fn app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, OAuthClient, reqwest::Client, String)>,
    {
        T::from((
            self.state.db.clone(),
            self.state.oauth.clone(),
            self.state.http.clone(),
            self.state.userinfo_url.clone(),
        ))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let oauth = BasicClient::new(ClientId::new(TEST_OAUTH_CLIENT_ID.to_string()))
            .set_client_secret(ClientSecret::new(TEST_OAUTH_CLIENT_SECRET.to_string()))
            .set_auth_uri(AuthUrl::new(format!("{mock_server_url}/oauth/authorize"))?)
            .set_token_uri(TokenUrl::new(format!("{mock_server_url}/oauth/token"))?)
            .set_redirect_uri(RedirectUrl::new(TEST_CALLBACK_URL.to_string())?);

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState {
                db,
                oauth,
                http: reqwest::Client::new(),
                userinfo_url: format!("{mock_server_url}/oauth/userinfo"),
            },
            session,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
