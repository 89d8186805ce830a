use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TempBan::Table)
                    .if_not_exists()
                    .col(string(TempBan::GuildId))
                    .col(string(TempBan::UserId))
                    .col(timestamp_with_time_zone(TempBan::ExpiresAt))
                    .col(string(TempBan::Reason))
                    .primary_key(
                        Index::create()
                            .name("pk_temp_ban_guild_user")
                            .col(TempBan::GuildId)
                            .col(TempBan::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_temp_ban_expires_at")
                    .table(TempBan::Table)
                    .col(TempBan::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TempBan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TempBan {
    Table,
    GuildId,
    UserId,
    ExpiresAt,
    Reason,
}
