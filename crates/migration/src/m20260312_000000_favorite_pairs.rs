//! One favorite per (user, entity) pair.
//!
//! The handlers check for an existing row before inserting; the unique
//! indexes make the pair invariant hold under concurrent inserts too.

use sea_orm_migration::prelude::*;

use crate::m20260301_000000_init::{FavoritePeople, FavoritePlanets};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx-favorite_people-user_id-people_id-unique")
                    .table(FavoritePeople::Table)
                    .col(FavoritePeople::UserId)
                    .col(FavoritePeople::PeopleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorite_planets-user_id-planet_id-unique")
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .col(FavoritePlanets::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-favorite_planets-user_id-planet_id-unique")
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx-favorite_people-user_id-people_id-unique")
                    .table(FavoritePeople::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
