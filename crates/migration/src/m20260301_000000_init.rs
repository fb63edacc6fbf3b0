//! Initial schema migration.
//!
//! Creates the complete Holonet schema:
//!
//! - `users`: accounts that own favorites
//! - `people`: characters catalogue
//! - `planets`: planets catalogue
//! - `favorite_people`: user -> person links
//! - `favorite_planets`: user -> planet links

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
pub(crate) enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
}

#[derive(Iden)]
pub(crate) enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
}

#[derive(Iden)]
pub(crate) enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    Population,
    Climate,
}

#[derive(Iden)]
pub(crate) enum FavoritePeople {
    Table,
    Id,
    UserId,
    PeopleId,
}

#[derive(Iden)]
pub(crate) enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. People
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(120).not_null())
                    .col(ColumnDef::new(People::Height).string_len(50))
                    .col(ColumnDef::new(People::Mass).string_len(50))
                    .col(ColumnDef::new(People::HairColor).string_len(50))
                    .col(ColumnDef::new(People::SkinColor).string_len(50))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Planets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Planets::Diameter).string_len(50))
                    .col(ColumnDef::new(Planets::Population).string_len(50))
                    .col(ColumnDef::new(Planets::Climate).string_len(50))
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Favorite people
        // ───────────────────────────────────────────────────────────────────
        // `user_id` carries no FK: favorites may reference users seeded later.
        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritePeople::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritePeople::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(FavoritePeople::PeopleId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorite_people-people_id")
                            .from(FavoritePeople::Table, FavoritePeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorite_people-user_id")
                    .table(FavoritePeople::Table)
                    .col(FavoritePeople::UserId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Favorite planets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritePlanets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FavoritePlanets::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FavoritePlanets::PlanetId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-favorite_planets-planet_id")
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-favorite_planets-user_id")
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FavoritePeople::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
