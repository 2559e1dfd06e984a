use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarlogUser::Table)
                    .if_not_exists()
                    .col(pk_auto(StarlogUser::Id))
                    .col(string_uniq(StarlogUser::Subject))
                    .col(string_null(StarlogUser::Email))
                    .col(string_null(StarlogUser::Nickname))
                    .col(timestamp(StarlogUser::CreatedAt))
                    .col(timestamp_null(StarlogUser::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarlogUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StarlogUser {
    Table,
    Id,
    Subject,
    Email,
    Nickname,
    CreatedAt,
    DeletedAt,
}
