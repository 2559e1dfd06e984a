use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches a user by id, excluding soft-deleted rows
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::StarlogUser::find_by_id(user_id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Fetches a user by their OAuth subject, excluding soft-deleted rows
    pub async fn get_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::StarlogUser::find()
            .filter(entity::user::Column::Subject.eq(subject))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Creates a new user
    pub async fn create(
        &self,
        subject: &str,
        email: Option<String>,
        nickname: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(email),
            nickname: ActiveValue::Set(nickname),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Fetches the user matching the OAuth subject, creating the row on
    /// first login
    pub async fn get_or_create_by_subject(
        &self,
        subject: &str,
        email: Option<String>,
        nickname: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        match self.get_by_subject(subject).await? {
            Some(user) => Ok(user),
            None => self.create(subject, email, nickname).await,
        }
    }
}
