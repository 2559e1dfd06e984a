use chrono::NaiveDate;
use entity::diary::EmotionPolarity;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::zodiac::Point;

/// Canonical constellation template shape served by the template endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StarTemplateDto {
    pub code: String,
    pub name_ko: String,
    pub start_mmdd: String,
    pub end_mmdd: String,
    pub points: Vec<Point>,
    pub path_index: Option<Vec<usize>>,
}

/// Inbound template payload accepting the legacy field names
/// (`star_code`/`zodiac_code`, `start_day`, `end_day`) alongside the
/// canonical ones. All legacy-name translation lives here; the rest of the
/// crate only ever sees the canonical shape.
#[derive(Debug, Deserialize)]
pub struct RawStarTemplate {
    #[serde(alias = "star_code", alias = "zodiac_code")]
    pub code: String,
    pub name_ko: String,
    #[serde(alias = "start_day")]
    pub start_mmdd: String,
    #[serde(alias = "end_day")]
    pub end_mmdd: String,
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default)]
    pub path_index: Option<Vec<usize>>,
}

impl From<RawStarTemplate> for StarTemplateDto {
    fn from(raw: RawStarTemplate) -> Self {
        Self {
            code: raw.code,
            name_ko: raw.name_ko,
            start_mmdd: raw.start_mmdd,
            end_mmdd: raw.end_mmdd,
            points: raw.points,
            path_index: raw.path_index,
        }
    }
}

/// One star of the sky view: a season day positioned on the constellation
/// path, carrying the user's entry for that day when one exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StarDayDto {
    pub date: NaiveDate,
    pub x: f64,
    pub y: f64,
    pub has_entry: bool,
    #[schema(value_type = Option<String>)]
    pub polarity: Option<EmotionPolarity>,
    pub intensity: Option<i16>,
}

/// The rendered sky for one zodiac season.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SkyDto {
    pub code: String,
    pub name_ko: String,
    pub season_start: NaiveDate,
    pub season_end: NaiveDate,
    pub days_count: usize,
    /// Exactly `days_count` stars, one per season day.
    pub stars: Vec<StarDayDto>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SkyQuery {
    /// `YYYY-MM-DD` reference date; defaults to today.
    pub date: Option<String>,
}
