pub use sea_orm_migration::prelude::*;

mod m20260110_000001_starlog_user;
mod m20260110_000002_tag;
mod m20260110_000003_diary;
mod m20260110_000004_diary_tag;
mod m20260110_000005_star_template;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_starlog_user::Migration),
            Box::new(m20260110_000002_tag::Migration),
            Box::new(m20260110_000003_diary::Migration),
            Box::new(m20260110_000004_diary_tag::Migration),
            Box::new(m20260110_000005_star_template::Migration),
        ]
    }
}
