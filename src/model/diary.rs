use chrono::{NaiveDate, NaiveDateTime};
use entity::diary::EmotionPolarity;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::tag::TagDto;

/// One diary entry as returned by the list and by-date endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiaryDto {
    pub diary_id: i32,
    pub entry_date: NaiveDate,
    pub content: String,
    #[schema(value_type = String)]
    pub emotion_polarity: EmotionPolarity,
    pub emotion_intensity: Option<i16>,
    pub tags: Vec<TagDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl DiaryDto {
    pub fn from_model(diary: entity::diary::Model, tags: Vec<entity::tag::Model>) -> Self {
        Self {
            diary_id: diary.id,
            entry_date: diary.entry_date,
            content: diary.content,
            emotion_polarity: diary.emotion_polarity,
            emotion_intensity: diary.emotion_intensity,
            tags: tags.into_iter().map(TagDto::from).collect(),
            created_at: diary.created_at,
            updated_at: diary.updated_at,
        }
    }
}

/// One page of diary entries plus the cursor for the next page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiaryPageDto {
    pub items: Vec<DiaryDto>,
    /// Opaque cursor for the next page; absent when the page is empty.
    pub next_cursor: Option<String>,
}

/// Query parameters of the diary list endpoint. Every filter is optional;
/// malformed values are treated as absent rather than rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DiaryListQuery {
    /// `YYYY-MM` month filter on entry date.
    pub month: Option<String>,
    /// `YYYY-MM-DD` exact entry date filter.
    pub date: Option<String>,
    /// Case-insensitive substring match on content.
    pub q: Option<String>,
    /// Emotion polarity filter: POSITIVE, NEGATIVE, or UNSET.
    pub polarity: Option<String>,
    /// Comma-separated tag ids; entries must carry every listed tag.
    pub tag_ids: Option<String>,
    /// Cursor from a previous page's `next_cursor`.
    pub cursor: Option<String>,
    /// Page size, clamped to 1..=50 (default 20).
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DiaryByDateQuery {
    /// `YYYY-MM-DD` entry date.
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDiaryDto {
    pub entry_date: NaiveDate,
    pub content: String,
    #[schema(value_type = String)]
    pub emotion_polarity: EmotionPolarity,
    /// 1..=5 when set.
    pub emotion_intensity: Option<i16>,
    pub tag_ids: Option<Vec<i32>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDiaryDto {
    pub diary_id: i32,
    pub content: String,
    #[schema(value_type = String)]
    pub emotion_polarity: EmotionPolarity,
    pub emotion_intensity: Option<i16>,
    pub tag_ids: Option<Vec<i32>>,
}
