//! Links between a user and a person they marked as favorite.

use sea_orm::entity::prelude::*;

use crate::people::Person;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub people_id: i32,
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
        belongs_to = "super::people::Entity",
        from = "Column::PeopleId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A favorite link with the referenced person embedded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoritePerson {
    pub id: i32,
    pub user_id: i32,
    pub person: Person,
}

impl FavoritePerson {
    pub(crate) fn new(link: Model, person: super::people::Model) -> Self {
        Self {
            id: link.id,
            user_id: link.user_id,
            person: person.into(),
        }
    }

    pub fn people_id(&self) -> i32 {
        self.person.id
    }
}
