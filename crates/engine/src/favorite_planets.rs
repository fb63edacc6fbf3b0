//! Links between a user and a planet they marked as favorite.

use sea_orm::entity::prelude::*;

use crate::planets::Planet;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planets,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A favorite link with the referenced planet embedded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: i32,
    pub planet: Planet,
}

impl FavoritePlanet {
    pub(crate) fn new(link: Model, planet: super::planets::Model) -> Self {
        Self {
            id: link.id,
            user_id: link.user_id,
            planet: planet.into(),
        }
    }

    pub fn planet_id(&self) -> i32 {
        self.planet.id
    }
}
