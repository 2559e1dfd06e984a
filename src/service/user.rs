use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

use crate::{
    data::{diary::DiaryRepository, user::UserRepository},
    error::{auth::AuthError, Error},
    model::user::{HomeSummaryDto, ProfileDto, UserDto},
    util::time::most_recent_monday,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Home screen summary for the authenticated user: profile, entries
    /// written since the most recent Monday, and whether today's entry
    /// already exists.
    pub async fn home_summary(
        &self,
        auth_user_id: Option<i32>,
        today: NaiveDate,
    ) -> Result<HomeSummaryDto, Error> {
        let user_id = auth_user_id.ok_or(AuthError::NotLoggedIn)?;

        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let monday = most_recent_monday(today).and_time(NaiveTime::MIN);

        let repository = DiaryRepository::new(self.db);
        let diary_count = repository.count_created_since(user_id, monday).await?;
        let has_entry_today = repository.exists_for_date(user_id, today).await?;

        Ok(HomeSummaryDto {
            profile: ProfileDto {
                nickname: user.nickname,
                email: user.email,
            },
            diary_count,
            has_entry_today,
        })
    }
}
