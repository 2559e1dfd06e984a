use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The currently logged-in user's public profile.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub nickname: Option<String>,
    pub email: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            user_id: user.id,
            nickname: user.nickname,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub nickname: Option<String>,
    pub email: Option<String>,
}

/// Home screen summary: who the user is, how much they wrote this week, and
/// whether today's entry exists yet.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeSummaryDto {
    pub profile: ProfileDto,
    /// Diary entries created since the most recent Monday.
    pub diary_count: u64,
    pub has_entry_today: bool,
}
