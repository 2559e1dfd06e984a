use oauth2::{CsrfToken, Scope};

use crate::model::app::OAuthClient;

/// The authorize URL to redirect the user to, plus the CSRF state that must
/// be stored in their session for callback validation.
pub struct LoginRedirect {
    pub login_url: String,
    pub state: String,
}

pub fn login_service(oauth: &OAuthClient) -> LoginRedirect {
    let (login_url, csrf) = oauth
        .authorize_url(CsrfToken::new_random)
        .add_scope(Scope::new("openid".to_string()))
        .add_scope(Scope::new("email".to_string()))
        .add_scope(Scope::new("profile".to_string()))
        .url();

    LoginRedirect {
        login_url: login_url.to_string(),
        state: csrf.secret().to_string(),
    }
}
