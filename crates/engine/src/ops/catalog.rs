use sea_orm::{QueryOrder, prelude::*};

use crate::{EngineError, Person, Planet, ResultEngine, User, people, planets, users};

use super::Engine;

impl Engine {
    /// Every person, in storage order.
    pub async fn list_people(&self) -> ResultEngine<Vec<Person>> {
        let rows = people::Entity::find()
            .order_by_asc(people::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    /// Look a person up by id.
    pub async fn person(&self, id: i32) -> ResultEngine<Person> {
        people::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Person::from)
            .ok_or_else(|| EngineError::KeyNotFound("Person not found".to_string()))
    }

    /// Every planet, in storage order.
    pub async fn list_planets(&self) -> ResultEngine<Vec<Planet>> {
        let rows = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    /// Look a planet up by id.
    pub async fn planet(&self, id: i32) -> ResultEngine<Planet> {
        planets::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Planet::from)
            .ok_or_else(|| EngineError::KeyNotFound("Planet not found".to_string()))
    }

    /// Every user, in storage order.
    pub async fn list_users(&self) -> ResultEngine<Vec<User>> {
        let rows = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
