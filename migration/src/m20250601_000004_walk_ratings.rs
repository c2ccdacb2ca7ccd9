use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000003_walk_requests::WalkRequests};

static FK_WALK_RATING_REQUEST_ID: &str = "fk_walk_rating_request_id";
static FK_WALK_RATING_WALKER_ID: &str = "fk_walk_rating_walker_id";
static FK_WALK_RATING_OWNER_ID: &str = "fk_walk_rating_owner_id";
static IDX_WALK_RATING_REQUEST_ID: &str = "idx_walk_rating_request_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WalkRatings::Table)
                    .if_not_exists()
                    .col(pk_auto(WalkRatings::Id))
                    .col(integer(WalkRatings::RequestId))
                    .col(integer(WalkRatings::WalkerId))
                    .col(integer(WalkRatings::OwnerId))
                    .col(
                        integer(WalkRatings::Rating)
                            .check(Expr::col(WalkRatings::Rating).between(1, 5)),
                    )
                    .col(text_null(WalkRatings::Comments))
                    .col(timestamp(WalkRatings::RatedAt))
                    .to_owned(),
            )
            .await?;

        // One rating per walk request
        manager
            .create_index(
                Index::create()
                    .name(IDX_WALK_RATING_REQUEST_ID)
                    .table(WalkRatings::Table)
                    .col(WalkRatings::RequestId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WALK_RATING_REQUEST_ID)
                    .from_tbl(WalkRatings::Table)
                    .from_col(WalkRatings::RequestId)
                    .to_tbl(WalkRequests::Table)
                    .to_col(WalkRequests::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WALK_RATING_WALKER_ID)
                    .from_tbl(WalkRatings::Table)
                    .from_col(WalkRatings::WalkerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WALK_RATING_OWNER_ID)
                    .from_tbl(WalkRatings::Table)
                    .from_col(WalkRatings::OwnerId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_WALK_RATING_OWNER_ID,
            FK_WALK_RATING_WALKER_ID,
            FK_WALK_RATING_REQUEST_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(WalkRatings::Table).to_owned())
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WALK_RATING_REQUEST_ID)
                    .table(WalkRatings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WalkRatings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WalkRatings {
    Table,
    Id,
    RequestId,
    WalkerId,
    OwnerId,
    Rating,
    Comments,
    RatedAt,
}
