use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_users::Users;

static FK_DOG_OWNER_ID: &str = "fk_dog_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dogs::Table)
                    .if_not_exists()
                    .col(pk_auto(Dogs::Id))
                    .col(integer(Dogs::OwnerId))
                    .col(string_len(Dogs::Name, 50))
                    .col(string_len(Dogs::Size, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOG_OWNER_ID)
                    .from_tbl(Dogs::Table)
                    .from_col(Dogs::OwnerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DOG_OWNER_ID)
                    .table(Dogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Dogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Dogs {
    Table,
    Id,
    OwnerId,
    Name,
    Size,
}
