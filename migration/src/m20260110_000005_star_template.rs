use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(StarTemplate::Id))
                    .col(string_uniq(StarTemplate::Code))
                    .col(string(StarTemplate::NameKo))
                    .col(string_len(StarTemplate::StartMmdd, 5))
                    .col(string_len(StarTemplate::EndMmdd, 5))
                    .col(json(StarTemplate::Points))
                    .col(json_null(StarTemplate::PathIndex))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StarTemplate {
    Table,
    Id,
    Code,
    NameKo,
    StartMmdd,
    EndMmdd,
    Points,
    PathIndex,
}
