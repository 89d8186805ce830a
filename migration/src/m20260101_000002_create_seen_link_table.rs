use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeenLink::Table)
                    .if_not_exists()
                    .col(string(SeenLink::UserId))
                    .col(string(SeenLink::VideoId))
                    .col(string(SeenLink::Url))
                    .col(string(SeenLink::MessageId))
                    .col(timestamp_with_time_zone(SeenLink::CreatedAt))
                    // One row per (user, video); a duplicate insert is the repost signal
                    .primary_key(
                        Index::create()
                            .name("pk_seen_link_user_video")
                            .col(SeenLink::UserId)
                            .col(SeenLink::VideoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seen_link_user_id")
                            .from(SeenLink::Table, SeenLink::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seen_link_video_id")
                    .table(SeenLink::Table)
                    .col(SeenLink::VideoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeenLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeenLink {
    Table,
    UserId,
    VideoId,
    Url,
    MessageId,
    CreatedAt,
}
