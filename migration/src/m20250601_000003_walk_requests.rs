use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000002_dogs::Dogs};

static FK_WALK_REQUEST_DOG_ID: &str = "fk_walk_request_dog_id";
static FK_WALK_REQUEST_WALKER_ID: &str = "fk_walk_request_walker_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WalkRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(WalkRequests::Id))
                    .col(integer(WalkRequests::DogId))
                    .col(timestamp(WalkRequests::RequestedTime))
                    .col(integer(WalkRequests::DurationMinutes))
                    .col(string_len(WalkRequests::Location, 255))
                    .col(string_len(WalkRequests::Status, 16))
                    .col(integer_null(WalkRequests::WalkerId))
                    .col(timestamp(WalkRequests::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WALK_REQUEST_DOG_ID)
                    .from_tbl(WalkRequests::Table)
                    .from_col(WalkRequests::DogId)
                    .to_tbl(Dogs::Table)
                    .to_col(Dogs::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WALK_REQUEST_WALKER_ID)
                    .from_tbl(WalkRequests::Table)
                    .from_col(WalkRequests::WalkerId)
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
                    .name(FK_WALK_REQUEST_WALKER_ID)
                    .table(WalkRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WALK_REQUEST_DOG_ID)
                    .table(WalkRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WalkRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WalkRequests {
    Table,
    Id,
    DogId,
    RequestedTime,
    DurationMinutes,
    Location,
    Status,
    WalkerId,
    CreatedAt,
}
