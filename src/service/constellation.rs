use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{diary::DiaryRepository, star_template::StarTemplateRepository},
    error::{auth::AuthError, Error},
    model::star::{SkyDto, StarDayDto},
    service::star::template_dto,
    zodiac::{expand_to_days, season_range, sign_for_date},
};

pub struct ConstellationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConstellationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Render the caller's sky for the zodiac season containing `date`.
    ///
    /// The constellation path is resampled to one star per season day, so
    /// the response always carries exactly `days_count` stars regardless of
    /// how many anchors the template has. A missing template degrades to an
    /// empty path (all stars at the origin).
    pub async fn sky(&self, auth_user_id: Option<i32>, date: NaiveDate) -> Result<SkyDto, Error> {
        let user_id = auth_user_id.ok_or(AuthError::NotLoggedIn)?;

        let sign = sign_for_date(date);
        let range = season_range(date, sign);

        let template = StarTemplateRepository::new(self.db)
            .find_by_code(sign.code())
            .await?
            .map(template_dto);

        let (name_ko, points, path_index) = match template {
            Some(template) => (template.name_ko, template.points, template.path_index),
            None => (sign.name_ko().to_string(), Vec::new(), None),
        };

        let entries = DiaryRepository::new(self.db)
            .find_in_range(user_id, range.start, range.end)
            .await?;

        // Entries arrive in ascending creation order, so the newest entry
        // for a date wins.
        let mut entry_by_date: HashMap<NaiveDate, entity::diary::Model> = HashMap::new();
        for entry in entries {
            entry_by_date.insert(entry.entry_date, entry);
        }

        let positions = expand_to_days(&points, path_index.as_deref(), range.days_count);

        let stars = range
            .dates
            .iter()
            .zip(positions)
            .map(|(date, point)| {
                let entry = entry_by_date.get(date);

                StarDayDto {
                    date: *date,
                    x: point.x,
                    y: point.y,
                    has_entry: entry.is_some(),
                    polarity: entry.map(|e| e.emotion_polarity),
                    intensity: entry.and_then(|e| e.emotion_intensity),
                }
            })
            .collect();

        Ok(SkyDto {
            code: sign.code().to_string(),
            name_ko,
            season_start: range.start,
            season_end: range.end,
            days_count: range.days_count,
            stars,
        })
    }
}
