use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub tag_id: i32,
    pub tag_name: String,
}

impl From<entity::tag::Model> for TagDto {
    fn from(tag: entity::tag::Model) -> Self {
        Self {
            tag_id: tag.id,
            tag_name: tag.name,
        }
    }
}
