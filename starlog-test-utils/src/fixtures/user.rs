use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct UserFixture<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl UserFixture<'_> {
    /// Insert a user with a derived email and nickname.
    pub async fn insert_user(&self, subject: &str) -> Result<entity::user::Model, TestError> {
        let user = entity::user::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(Some(format!("{subject}@example.com"))),
            nickname: ActiveValue::Set(Some(format!("nick-{subject}"))),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Insert a soft-deleted user.
    pub async fn insert_deleted_user(
        &self,
        subject: &str,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(Some(format!("{subject}@example.com"))),
            nickname: ActiveValue::Set(Some(format!("nick-{subject}"))),
            created_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}
