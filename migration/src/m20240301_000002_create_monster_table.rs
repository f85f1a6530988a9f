use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Monster::Table)
                    .if_not_exists()
                    .col(pk_auto(Monster::Id))
                    .col(string(Monster::Name))
                    .col(integer(Monster::Health))
                    .col(double(Monster::X).default(0.0))
                    .col(double(Monster::Y).default(0.0))
                    .col(string(Monster::PictureLink).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Monster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Monster {
    Table,
    Id,
    Name,
    Health,
    X,
    Y,
    PictureLink,
}
