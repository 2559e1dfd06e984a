use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Claims returned by the provider's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

pub struct CallbackService<'a> {
    state: &'a AppState,
}

impl<'a> CallbackService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Exchange the authorization code for an access token, fetch the
    /// provider's userinfo, and resolve the local user row (created on
    /// first login).
    ///
    /// Returns the local user id to store in the session.
    pub async fn handle_callback(&self, code: &str) -> Result<i32, Error> {
        let token = self
            .state
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.state.http)
            .await
            .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

        let userinfo = self.fetch_userinfo(token.access_token().secret()).await?;

        let user = UserRepository::new(&self.state.db)
            .get_or_create_by_subject(&userinfo.sub, userinfo.email, userinfo.name)
            .await?;

        Ok(user.id)
    }

    async fn fetch_userinfo(&self, access_token: &str) -> Result<UserInfo, Error> {
        let userinfo = self
            .state
            .http
            .get(&self.state.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(userinfo)
    }
}
