//! Planets catalogue.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
}

impl From<Model> for Planet {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            population: model.population,
            climate: model.climate,
        }
    }
}
