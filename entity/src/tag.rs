use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,

    /// Explicit display ordering, listed before name order; null sorts last.
    pub order_no: Option<i32>,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::diary_tag::Entity")]
    DiaryTag,
}

impl Related<super::diary_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiaryTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
