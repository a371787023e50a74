// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create scan_results table
        manager
            .create_table(
                Table::create()
                    .table(ScanResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScanResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScanResults::Filename).string_len(255).not_null())
                    .col(ColumnDef::new(ScanResults::Result).string_len(50).not_null())
                    .col(
                        ColumnDef::new(ScanResults::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ScanResults::Archived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ScanResults::Probability).double())
                    .col(ColumnDef::new(ScanResults::PredictionCorrect).boolean())
                    .to_owned(),
            )
            .await?;

        // Dashboard and archive views filter on the flag and sort by time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scan_results_archived_created_at")
                    .table(ScanResults::Table)
                    .col(ScanResults::Archived)
                    .col(ScanResults::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScanResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScanResults {
    Table,
    Id,
    Filename,
    Result,
    CreatedAt,
    Archived,
    Probability,
    PredictionCorrect,
}
