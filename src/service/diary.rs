use std::collections::HashSet;

use entity::diary::EmotionPolarity;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        diary::{DiaryFilter, DiaryRepository},
        tag::TagRepository,
    },
    error::{auth::AuthError, diary::DiaryError, Error},
    model::diary::{CreateDiaryDto, DiaryDto, DiaryListQuery, DiaryPageDto, UpdateDiaryDto},
    util::time::{format_cursor, parse_cursor, parse_entry_date, parse_month_range},
};

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 50;

// When tag filtering the page is assembled in-process from an over-fetch,
// since the AND-intersection cannot be pushed into the row query.
const TAG_OVERFETCH_FACTOR: u64 = 5;
const MAX_TAG_FETCH: u64 = 200;

pub struct DiaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiaryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the caller's diary entries, newest entry date first, with
    /// optional filters and cursor pagination.
    ///
    /// Malformed optional filters are treated as absent. The returned
    /// `next_cursor` is the creation timestamp of the last item actually
    /// returned, or `None` for an empty page.
    pub async fn query_diaries(
        &self,
        auth_user_id: Option<i32>,
        query: &DiaryListQuery,
    ) -> Result<DiaryPageDto, Error> {
        let user_id = auth_user_id.ok_or(AuthError::NotLoggedIn)?;

        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let tag_ids = query
            .tag_ids
            .as_deref()
            .map(parse_tag_ids)
            .unwrap_or_default();

        let fetch_limit = if tag_ids.is_empty() {
            limit
        } else {
            (limit * TAG_OVERFETCH_FACTOR).min(MAX_TAG_FETCH)
        };

        let q = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let filter = DiaryFilter {
            user_id,
            month: query.month.as_deref().and_then(parse_month_range),
            date: query.date.as_deref().and_then(parse_entry_date),
            q,
            polarity: query.polarity.as_deref().and_then(parse_polarity),
            cursor: query.cursor.as_deref().and_then(parse_cursor),
            fetch_limit,
        };

        let repository = DiaryRepository::new(self.db);
        let rows = repository.search(&filter).await?;

        let row_ids: Vec<i32> = rows.iter().map(|diary| diary.id).collect();
        let mut tags_by_diary = repository.tags_for_diaries(&row_ids).await?;

        let mut items = Vec::new();
        for diary in rows {
            let tags = tags_by_diary.remove(&diary.id).unwrap_or_default();

            if !tag_ids.is_empty() {
                let attached: HashSet<i32> = tags.iter().map(|tag| tag.id).collect();
                if !tag_ids.iter().all(|id| attached.contains(id)) {
                    continue;
                }
            }

            items.push(DiaryDto::from_model(diary, tags));

            if items.len() as u64 == limit {
                break;
            }
        }

        let next_cursor = items.last().map(|item| format_cursor(item.created_at));

        Ok(DiaryPageDto { items, next_cursor })
    }

    /// Create a diary entry and its tag links in one transaction.
    pub async fn create_diary(
        &self,
        auth_user_id: Option<i32>,
        dto: CreateDiaryDto,
    ) -> Result<DiaryDto, Error> {
        let user_id = auth_user_id.ok_or(AuthError::NotLoggedIn)?;
        validate_entry(&dto.content, dto.emotion_intensity)?;

        let txn = self.db.begin().await?;

        let diary = DiaryRepository::new(&txn)
            .create(
                user_id,
                dto.entry_date,
                &dto.content,
                dto.emotion_polarity,
                dto.emotion_intensity,
            )
            .await?;

        if let Some(ref tag_ids) = dto.tag_ids {
            let tag_ids = TagRepository::new(&txn).filter_active_ids(tag_ids).await?;
            DiaryRepository::new(&txn)
                .replace_tags(diary.id, &tag_ids)
                .await?;
        }

        txn.commit().await?;

        self.load_dto(diary).await
    }

    /// Update an entry owned by the caller, replacing its tag links when a
    /// tag set is given.
    pub async fn update_diary(
        &self,
        auth_user_id: Option<i32>,
        dto: UpdateDiaryDto,
    ) -> Result<DiaryDto, Error> {
        let user_id = auth_user_id.ok_or(AuthError::NotLoggedIn)?;
        validate_entry(&dto.content, dto.emotion_intensity)?;

        let txn = self.db.begin().await?;
        let repository = DiaryRepository::new(&txn);

        // Entries of other users are reported as missing, never as forbidden
        let Some(diary) = repository.find_by_id(dto.diary_id).await? else {
            return Err(DiaryError::NotFound(dto.diary_id).into());
        };
        if diary.user_id != user_id {
            return Err(DiaryError::NotFound(dto.diary_id).into());
        }

        let diary = repository
            .update(diary, &dto.content, dto.emotion_polarity, dto.emotion_intensity)
            .await?;

        if let Some(ref tag_ids) = dto.tag_ids {
            let tag_ids = TagRepository::new(&txn).filter_active_ids(tag_ids).await?;
            repository.replace_tags(diary.id, &tag_ids).await?;
        }

        txn.commit().await?;

        self.load_dto(diary).await
    }

    /// The caller's newest entry for an exact date, or `None`.
    pub async fn diary_by_date(
        &self,
        auth_user_id: Option<i32>,
        date: &str,
    ) -> Result<Option<DiaryDto>, Error> {
        let user_id = auth_user_id.ok_or(AuthError::NotLoggedIn)?;
        let date =
            parse_entry_date(date).ok_or_else(|| DiaryError::InvalidDate(date.to_string()))?;

        let repository = DiaryRepository::new(self.db);
        let Some(diary) = repository.find_by_date(user_id, date).await? else {
            return Ok(None);
        };

        Ok(Some(self.load_dto(diary).await?))
    }

    async fn load_dto(&self, diary: entity::diary::Model) -> Result<DiaryDto, Error> {
        let tags = DiaryRepository::new(self.db)
            .tags_for_diaries(&[diary.id])
            .await?
            .remove(&diary.id)
            .unwrap_or_default();

        Ok(DiaryDto::from_model(diary, tags))
    }
}

fn validate_entry(content: &str, intensity: Option<i16>) -> Result<(), DiaryError> {
    if content.trim().is_empty() {
        return Err(DiaryError::EmptyContent);
    }

    if let Some(intensity) = intensity {
        if !(1..=5).contains(&intensity) {
            return Err(DiaryError::InvalidIntensity(intensity));
        }
    }

    Ok(())
}

fn parse_polarity(value: &str) -> Option<EmotionPolarity> {
    match value.trim() {
        "POSITIVE" => Some(EmotionPolarity::Positive),
        "NEGATIVE" => Some(EmotionPolarity::Negative),
        "UNSET" => Some(EmotionPolarity::Unset),
        _ => None,
    }
}

/// Comma-separated tag ids; non-numeric fragments are dropped, duplicates
/// collapsed.
fn parse_tag_ids(value: &str) -> Vec<i32> {
    let mut seen = HashSet::new();

    value
        .split(',')
        .filter_map(|part| part.trim().parse::<i32>().ok())
        .filter(|id| seen.insert(*id))
        .collect()
}
