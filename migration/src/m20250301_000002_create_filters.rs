// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_crawler::Crawler;

/// 创建 filters 表及其指向 crawler 的外键
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Filters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Filters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Filters::CrawlerId).big_integer().null())
                    // Filters outlive their crawler; the reference is cleared instead
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_filters_crawler_id")
                            .from(Filters::Table, Filters::CrawlerId)
                            .to(Crawler::Table, Crawler::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_filters_crawler_id")
                    .table(Filters::Table)
                    .col(Filters::CrawlerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Filters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Filters {
    Table,
    Id,
    CrawlerId,
}
