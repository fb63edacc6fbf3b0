use serde::{Deserialize, Serialize};

/// Plain `{"message": ...}` body used for acknowledgements and errors alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub mod people {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Person {
        pub id: i32,
        pub name: String,
        pub height: Option<String>,
        pub mass: Option<String>,
        pub hair_color: Option<String>,
        pub skin_color: Option<String>,
    }
}

pub mod planet {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Planet {
        pub id: i32,
        pub name: String,
        pub diameter: Option<String>,
        pub population: Option<String>,
        pub climate: Option<String>,
    }
}

pub mod user {
    use super::*;

    /// Public view of a user: credentials and flags are never exposed.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: i32,
        pub email: String,
    }
}

pub mod favorite {
    use super::*;

    use crate::{people::Person, planet::Planet};

    /// Body of `POST`/`DELETE /favorite/{kind}/{id}`.
    ///
    /// `user_id` is optional at the type level so a missing field can be
    /// reported as a bad request instead of a deserialization failure.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct FavoriteNew {
        #[serde(default)]
        pub user_id: Option<i32>,
    }

    /// Query string of `GET /users/favorites`.
    ///
    /// Kept as a string; the handler parses it so that an empty or malformed
    /// value gets a meaningful message.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct FavoritesQuery {
        pub user_id: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FavoritePerson {
        pub id: i32,
        pub user_id: i32,
        pub people_id: i32,
        pub people: Person,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FavoritePlanet {
        pub id: i32,
        pub user_id: i32,
        pub planet_id: i32,
        pub planet: Planet,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FavoritesResponse {
        pub favorite_people: Vec<FavoritePerson>,
        pub favorite_planets: Vec<FavoritePlanet>,
    }
}
