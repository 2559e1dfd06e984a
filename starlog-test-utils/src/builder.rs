//! Declarative test builder.
//!
//! Configures database tables and mock OAuth provider endpoints before
//! execution; all queued operations run during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, setup::TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_app_tables: bool,

    // Mock OAuth provider endpoints: (payload, expected request count)
    token_endpoints: Vec<(String, usize)>,
    userinfo_endpoints: Vec<(serde_json::Value, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_app_tables: false,
            token_endpoints: Vec::new(),
            userinfo_endpoints: Vec::new(),
        }
    }

    /// Add all application tables (user, tag, diary, diary_tag, star_template)
    /// to the test database.
    pub fn with_app_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Add a mock token-exchange endpoint at `POST /oauth/token` returning the
    /// given access token.
    pub fn with_token_endpoint(
        mut self,
        access_token: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.token_endpoints
            .push((access_token.into(), expected_requests));
        self
    }

    /// Add a mock userinfo endpoint at `GET /oauth/userinfo` returning the
    /// given claims.
    pub fn with_userinfo_endpoint(
        mut self,
        sub: &str,
        email: Option<&str>,
        name: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        let claims = serde_json::json!({
            "sub": sub,
            "email": email,
            "name": name,
        });
        self.userinfo_endpoints.push((claims, expected_requests));
        self
    }

    /// Build the test setup: creates tables first, then mock endpoints.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        if self.include_app_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![
                    schema.create_table_from_entity(entity::prelude::StarlogUser),
                    schema.create_table_from_entity(entity::prelude::Tag),
                    schema.create_table_from_entity(entity::prelude::Diary),
                    schema.create_table_from_entity(entity::prelude::DiaryTag),
                    schema.create_table_from_entity(entity::prelude::StarTemplate),
                ])
                .await?;
        }

        for (access_token, expected_requests) in self.token_endpoints {
            let body = serde_json::json!({
                "access_token": access_token,
                "token_type": "Bearer",
                "expires_in": 3600,
            })
            .to_string();

            let mock = setup
                .server
                .mock("POST", "/oauth/token")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create_async()
                .await;

            setup.mocks.push(mock);
        }

        for (claims, expected_requests) in self.userinfo_endpoints {
            let mock = setup
                .server
                .mock("GET", "/oauth/userinfo")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(claims.to_string())
                .expect(expected_requests)
                .create_async()
                .await;

            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
