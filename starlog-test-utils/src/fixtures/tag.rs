use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct TagFixture<'a> {
    pub(crate) db: &'a DatabaseConnection,
}

impl TagFixture<'_> {
    pub async fn insert_tag(
        &self,
        name: &str,
        order_no: Option<i32>,
    ) -> Result<entity::tag::Model, TestError> {
        self.insert_tag_with_active(name, order_no, true).await
    }

    pub async fn insert_tag_with_active(
        &self,
        name: &str,
        order_no: Option<i32>,
        is_active: bool,
    ) -> Result<entity::tag::Model, TestError> {
        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            order_no: ActiveValue::Set(order_no),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        Ok(tag.insert(self.db).await?)
    }
}
