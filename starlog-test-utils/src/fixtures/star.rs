use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct StarFixture<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl StarFixture<'_> {
    /// Insert a constellation template. `points` is a JSON array of
    /// `{x, y}` objects in authoring space.
    pub async fn insert_template(
        &self,
        code: &str,
        name_ko: &str,
        start_mmdd: &str,
        end_mmdd: &str,
        points: serde_json::Value,
        path_index: Option<serde_json::Value>,
    ) -> Result<entity::star_template::Model, TestError> {
        let template = entity::star_template::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            name_ko: ActiveValue::Set(name_ko.to_string()),
            start_mmdd: ActiveValue::Set(start_mmdd.to_string()),
            end_mmdd: ActiveValue::Set(end_mmdd.to_string()),
            points: ActiveValue::Set(points),
            path_index: ActiveValue::Set(path_index),
            ..Default::default()
        };

        Ok(template.insert(self.db).await?)
    }
}
