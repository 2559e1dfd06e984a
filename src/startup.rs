use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::{
    config::Config,
    data::star_template::StarTemplateRepository,
    error::Error,
    model::{
        app::OAuthClient,
        star::{RawStarTemplate, StarTemplateDto},
    },
    zodiac::ZodiacSign,
};

/// Build and configure the OAuth client with the provided credentials
pub fn build_oauth_client(config: &Config) -> Result<OAuthClient, Error> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let oauth_client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.oauth_auth_url.clone())?)
        .set_token_uri(TokenUrl::new(config.oauth_token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(config.oauth_callback_url.clone())?);

    Ok(oauth_client)
}

/// Build the HTTP client used for the token exchange and userinfo requests.
///
/// Redirects are disabled: the OAuth endpoints must answer directly.
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(http)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = tower_sessions_redis_store::fred::prelude::Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Ensure every zodiac sign has a constellation template row.
///
/// An empty table is seeded with the 12 sign definitions (boundaries and
/// Korean names, no anchor points). When `STAR_TEMPLATE_FILE` is set the
/// file's templates are upserted on top, which is where real constellation
/// shapes come from.
pub async fn seed_star_templates(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let repository = StarTemplateRepository::new(db);

    if repository.count().await? == 0 {
        for sign in ZodiacSign::ALL {
            let def = sign.def();

            repository
                .upsert(
                    sign.code(),
                    def.name_ko,
                    def.start_mmdd,
                    def.end_mmdd,
                    serde_json::Value::Array(Vec::new()),
                    None,
                )
                .await?;
        }

        tracing::info!("seeded default constellation templates for all 12 signs");
    }

    let Some(ref path) = config.star_template_file else {
        return Ok(());
    };

    let raw = std::fs::read_to_string(path)?;
    let templates: Vec<RawStarTemplate> = serde_json::from_str(&raw)?;
    let count = templates.len();

    for template in templates.into_iter().map(StarTemplateDto::from) {
        if ZodiacSign::from_code(&template.code).is_none() {
            tracing::warn!(code = %template.code, "template code is not a known zodiac sign");
        }

        let path_index = match template.path_index {
            Some(ref index) => Some(serde_json::to_value(index)?),
            None => None,
        };

        repository
            .upsert(
                &template.code,
                &template.name_ko,
                &template.start_mmdd,
                &template.end_mmdd,
                serde_json::to_value(&template.points)?,
                path_index,
            )
            .await?;
    }

    tracing::info!(count, %path, "imported constellation templates");

    Ok(())
}
