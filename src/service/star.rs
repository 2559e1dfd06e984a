use sea_orm::DatabaseConnection;

use crate::{
    data::star_template::StarTemplateRepository, error::Error, model::star::StarTemplateDto,
};

pub struct StarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All stored constellation templates in canonical shape.
    pub async fn get_templates(&self) -> Result<Vec<StarTemplateDto>, Error> {
        let templates = StarTemplateRepository::new(self.db).get_all().await?;

        Ok(templates.into_iter().map(template_dto).collect())
    }
}

/// Decode a stored template row. Unreadable JSON degrades to an empty
/// point set rather than failing the request.
pub(crate) fn template_dto(model: entity::star_template::Model) -> StarTemplateDto {
    StarTemplateDto {
        code: model.code,
        name_ko: model.name_ko,
        start_mmdd: model.start_mmdd,
        end_mmdd: model.end_mmdd,
        points: serde_json::from_value(model.points).unwrap_or_default(),
        path_index: model
            .path_index
            .and_then(|value| serde_json::from_value(value).ok()),
    }
}
