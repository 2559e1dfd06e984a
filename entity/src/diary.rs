use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Emotional polarity of a diary entry, stored as its wire string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionPolarity {
    #[sea_orm(string_value = "POSITIVE")]
    Positive,
    #[sea_orm(string_value = "NEGATIVE")]
    Negative,
    #[sea_orm(string_value = "UNSET")]
    Unset,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "diary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub entry_date: Date,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub emotion_polarity: EmotionPolarity,

    /// 1..=5 when set.
    pub emotion_intensity: Option<i16>,

    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,

    /// Soft-delete marker, rows are never removed from the query path.
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::diary_tag::Entity")]
    DiaryTag,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::diary_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiaryTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
