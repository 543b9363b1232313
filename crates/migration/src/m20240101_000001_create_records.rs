//! Create `records` table.
//!
//! Email uniqueness is checked by the service on create; the table itself
//! carries no unique constraint.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(records_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Records::Table).to_owned()).await
    }
}

/// Text columns carry no length limit: any name/email accepted by validation must fit.
fn records_table() -> TableCreateStatement {
    Table::create()
        .table(Records::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Records::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Records::Name).string().not_null())
        .col(ColumnDef::new(Records::Email).string().not_null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Records { Table, Id, Name, Email }
