use sea_orm::DatabaseConnection;

use crate::{data::tag::TagRepository, error::Error, model::tag::TagDto};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All active tags in display order.
    pub async fn get_active_tags(&self) -> Result<Vec<TagDto>, Error> {
        let tags = TagRepository::new(self.db).get_active().await?;

        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}
