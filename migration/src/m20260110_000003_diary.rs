use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_starlog_user::StarlogUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diary::Table)
                    .if_not_exists()
                    .col(pk_auto(Diary::Id))
                    .col(integer(Diary::UserId))
                    .col(date(Diary::EntryDate))
                    .col(text(Diary::Content))
                    .col(string_len(Diary::EmotionPolarity, 16))
                    .col(small_integer_null(Diary::EmotionIntensity))
                    .col(timestamp(Diary::CreatedAt))
                    .col(timestamp_null(Diary::UpdatedAt))
                    .col(timestamp_null(Diary::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diary_user_id")
                            .from(Diary::Table, Diary::UserId)
                            .to(StarlogUser::Table, StarlogUser::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_diary_user_entry_date")
                    .table(Diary::Table)
                    .col(Diary::UserId)
                    .col(Diary::EntryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diary::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Diary {
    Table,
    Id,
    UserId,
    EntryDate,
    Content,
    EmotionPolarity,
    EmotionIntensity,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
