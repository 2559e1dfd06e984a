use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct StarTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarTemplateRepository<'a, C> {
    /// Creates a new instance of [`StarTemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::star_template::Model>, DbErr> {
        entity::prelude::StarTemplate::find()
            .order_by_asc(entity::star_template::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::star_template::Model>, DbErr> {
        entity::prelude::StarTemplate::find()
            .filter(entity::star_template::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::StarTemplate::find().count(self.db).await
    }

    /// Inserts the template or, when its code already exists, overwrites the
    /// existing row's fields
    pub async fn upsert(
        &self,
        code: &str,
        name_ko: &str,
        start_mmdd: &str,
        end_mmdd: &str,
        points: serde_json::Value,
        path_index: Option<serde_json::Value>,
    ) -> Result<entity::star_template::Model, DbErr> {
        match self.find_by_code(code).await? {
            Some(existing) => {
                let mut template = existing.into_active_model();
                template.name_ko = ActiveValue::Set(name_ko.to_string());
                template.start_mmdd = ActiveValue::Set(start_mmdd.to_string());
                template.end_mmdd = ActiveValue::Set(end_mmdd.to_string());
                template.points = ActiveValue::Set(points);
                template.path_index = ActiveValue::Set(path_index);

                template.update(self.db).await
            }
            None => {
                let template = entity::star_template::ActiveModel {
                    code: ActiveValue::Set(code.to_string()),
                    name_ko: ActiveValue::Set(name_ko.to_string()),
                    start_mmdd: ActiveValue::Set(start_mmdd.to_string()),
                    end_mmdd: ActiveValue::Set(end_mmdd.to_string()),
                    points: ActiveValue::Set(points),
                    path_index: ActiveValue::Set(path_index),
                    ..Default::default()
                };

                template.insert(self.db).await
            }
        }
    }
}
