use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::diary::EmotionPolarity;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Server-side filters of the diary list query. Lenient parsing happens in
/// the service layer; by the time a filter reaches here it is well-formed.
#[derive(Debug, Default)]
pub struct DiaryFilter {
    pub user_id: i32,
    /// Half-open `[start, end)` range on the entry date.
    pub month: Option<(NaiveDate, NaiveDate)>,
    pub date: Option<NaiveDate>,
    /// Lowercased content substring.
    pub q: Option<String>,
    pub polarity: Option<EmotionPolarity>,
    /// Only rows created strictly before this timestamp.
    pub cursor: Option<NaiveDateTime>,
    pub fetch_limit: u64,
}

pub struct DiaryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiaryRepository<'a, C> {
    /// Creates a new instance of [`DiaryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches the caller's non-deleted entries matching the filters, newest
    /// entry date first, ties broken by creation time descending.
    pub async fn search(&self, filter: &DiaryFilter) -> Result<Vec<entity::diary::Model>, DbErr> {
        let mut query = entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(filter.user_id))
            .filter(entity::diary::Column::DeletedAt.is_null());

        if let Some((start, end)) = filter.month {
            query = query
                .filter(entity::diary::Column::EntryDate.gte(start))
                .filter(entity::diary::Column::EntryDate.lt(end));
        }

        if let Some(date) = filter.date {
            query = query.filter(entity::diary::Column::EntryDate.eq(date));
        }

        if let Some(ref q) = filter.q {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::diary::Column::Content)))
                    .like(format!("%{q}%")),
            );
        }

        if let Some(polarity) = filter.polarity {
            query = query.filter(entity::diary::Column::EmotionPolarity.eq(polarity));
        }

        if let Some(cursor) = filter.cursor {
            query = query.filter(entity::diary::Column::CreatedAt.lt(cursor));
        }

        query
            .order_by_desc(entity::diary::Column::EntryDate)
            .order_by_desc(entity::diary::Column::CreatedAt)
            .limit(filter.fetch_limit)
            .all(self.db)
            .await
    }

    /// Fetches the tags linked to each of the given diary entries
    pub async fn tags_for_diaries(
        &self,
        diary_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::tag::Model>>, DbErr> {
        let mut tags_by_diary: HashMap<i32, Vec<entity::tag::Model>> = HashMap::new();

        if diary_ids.is_empty() {
            return Ok(tags_by_diary);
        }

        let links = entity::prelude::DiaryTag::find()
            .filter(entity::diary_tag::Column::DiaryId.is_in(diary_ids.to_vec()))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        for (link, tag) in links {
            if let Some(tag) = tag {
                tags_by_diary.entry(link.diary_id).or_default().push(tag);
            }
        }

        Ok(tags_by_diary)
    }

    /// Fetches an entry by id, excluding soft-deleted rows
    pub async fn find_by_id(&self, diary_id: i32) -> Result<Option<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find_by_id(diary_id)
            .filter(entity::diary::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Fetches the caller's newest non-deleted entry for an exact date
    pub async fn find_by_date(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .filter(entity::diary::Column::EntryDate.eq(date))
            .filter(entity::diary::Column::DeletedAt.is_null())
            .order_by_desc(entity::diary::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Fetches the caller's non-deleted entries within `start..=end`,
    /// ascending by entry date
    pub async fn find_in_range(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .filter(entity::diary::Column::EntryDate.between(start, end))
            .filter(entity::diary::Column::DeletedAt.is_null())
            .order_by_asc(entity::diary::Column::EntryDate)
            .order_by_asc(entity::diary::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Creates a new diary entry
    pub async fn create(
        &self,
        user_id: i32,
        entry_date: NaiveDate,
        content: &str,
        polarity: EmotionPolarity,
        intensity: Option<i16>,
    ) -> Result<entity::diary::Model, DbErr> {
        let diary = entity::diary::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            entry_date: ActiveValue::Set(entry_date),
            content: ActiveValue::Set(content.to_string()),
            emotion_polarity: ActiveValue::Set(polarity),
            emotion_intensity: ActiveValue::Set(intensity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        diary.insert(self.db).await
    }

    /// Updates an existing entry's content and emotion fields and bumps
    /// `updated_at`
    pub async fn update(
        &self,
        diary: entity::diary::Model,
        content: &str,
        polarity: EmotionPolarity,
        intensity: Option<i16>,
    ) -> Result<entity::diary::Model, DbErr> {
        let mut diary = diary.into_active_model();
        diary.content = ActiveValue::Set(content.to_string());
        diary.emotion_polarity = ActiveValue::Set(polarity);
        diary.emotion_intensity = ActiveValue::Set(intensity);
        diary.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        diary.update(self.db).await
    }

    /// Replaces the entry's tag links with the given set
    pub async fn replace_tags(&self, diary_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::DiaryTag::delete_many()
            .filter(entity::diary_tag::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let links = tag_ids.iter().map(|&tag_id| entity::diary_tag::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            tag_id: ActiveValue::Set(tag_id),
        });

        entity::prelude::DiaryTag::insert_many(links)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the caller's entries created at or after the given timestamp
    pub async fn count_created_since(
        &self,
        user_id: i32,
        since: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .filter(entity::diary::Column::DeletedAt.is_null())
            .filter(entity::diary::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Whether the caller has a non-deleted entry for the given date
    pub async fn exists_for_date(&self, user_id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        Ok(self.find_by_date(user_id, date).await?.is_some())
    }
}
