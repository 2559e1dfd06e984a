use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260110_000002_tag::Tag, m20260110_000003_diary::Diary};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiaryTag::Table)
                    .if_not_exists()
                    .col(integer(DiaryTag::DiaryId))
                    .col(integer(DiaryTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(DiaryTag::DiaryId)
                            .col(DiaryTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diary_tag_diary_id")
                            .from(DiaryTag::Table, DiaryTag::DiaryId)
                            .to(Diary::Table, Diary::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diary_tag_tag_id")
                            .from(DiaryTag::Table, DiaryTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiaryTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DiaryTag {
    Table,
    DiaryId,
    TagId,
}
