use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Reference rows carry no foreign keys. Deleting a child leaves its
/// identifier in the parent's list.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reference::Table)
                    .if_not_exists()
                    .col(pk_auto(Reference::Id))
                    .col(string(Reference::List))
                    .col(integer(Reference::ParentId))
                    .col(integer(Reference::ChildId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reference_list_parent_id")
                    .table(Reference::Table)
                    .col(Reference::List)
                    .col(Reference::ParentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reference {
    Table,
    Id,
    List,
    ParentId,
    ChildId,
}
