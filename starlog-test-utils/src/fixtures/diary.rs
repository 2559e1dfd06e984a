use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::error::TestError;

pub struct DiaryFixture<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl DiaryFixture<'_> {
    /// Insert a diary entry with `created_at = now`.
    pub async fn insert_diary(
        &self,
        user_id: i32,
        entry_date: NaiveDate,
        content: &str,
        polarity: entity::diary::EmotionPolarity,
        intensity: Option<i16>,
    ) -> Result<entity::diary::Model, TestError> {
        self.insert_diary_created_at(
            user_id,
            entry_date,
            content,
            polarity,
            intensity,
            Utc::now().naive_utc(),
        )
        .await
    }

    /// Insert a diary entry with an explicit creation timestamp, used by
    /// cursor pagination tests.
    pub async fn insert_diary_created_at(
        &self,
        user_id: i32,
        entry_date: NaiveDate,
        content: &str,
        polarity: entity::diary::EmotionPolarity,
        intensity: Option<i16>,
        created_at: NaiveDateTime,
    ) -> Result<entity::diary::Model, TestError> {
        let diary = entity::diary::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            entry_date: ActiveValue::Set(entry_date),
            content: ActiveValue::Set(content.to_string()),
            emotion_polarity: ActiveValue::Set(polarity),
            emotion_intensity: ActiveValue::Set(intensity),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        Ok(diary.insert(self.db).await?)
    }

    /// Link an existing tag to an existing diary entry.
    pub async fn attach_tag(
        &self,
        diary_id: i32,
        tag_id: i32,
    ) -> Result<entity::diary_tag::Model, TestError> {
        let link = entity::diary_tag::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            tag_id: ActiveValue::Set(tag_id),
        };

        Ok(link.insert(self.db).await?)
    }

    /// Mark a diary entry as soft-deleted.
    pub async fn soft_delete(&self, diary: entity::diary::Model) -> Result<(), TestError> {
        let mut diary_am = diary.into_active_model();
        diary_am.deleted_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        diary_am.update(self.db).await?;

        Ok(())
    }
}
