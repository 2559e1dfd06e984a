use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches all active tags ordered by `order_no` ascending with nulls
    /// last, then by name
    pub async fn get_active(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::IsActive.eq(true))
            .order_by_with_nulls(entity::tag::Column::OrderNo, Order::Asc, NullOrdering::Last)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// Fetches the subset of the given ids that exist as active tags
    pub async fn filter_active_ids(&self, tag_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids.to_vec()))
            .filter(entity::tag::Column::IsActive.eq(true))
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|tag| tag.id).collect())
    }
}
