use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Authored constellation template for one zodiac sign.
///
/// `points` holds the anchor polyline as a JSON array of `{x, y}` objects in
/// template authoring space; `path_index` optionally reorders the anchors
/// before sampling.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "star_template")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name_ko: String,
    pub start_mmdd: String,
    pub end_mmdd: String,
    pub points: Json,
    pub path_index: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
