use sea_orm::{ActiveValue, QueryFilter, QueryOrder, SqlErr, prelude::*};

use crate::{
    EngineError, FavoritePerson, FavoritePlanet, ResultEngine, favorite_people, favorite_planets,
    people, planets,
};

use super::Engine;

/// Favorites of a single user, referenced rows embedded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Favorites {
    pub people: Vec<FavoritePerson>,
    pub planets: Vec<FavoritePlanet>,
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// A failed link insert. Losing the race against a concurrent insert of the
/// same pair reads as the pair already being linked.
fn insert_error(err: DbErr, duplicate: &str) -> EngineError {
    if is_unique_violation(&err) {
        EngineError::ExistingKey(duplicate.to_string())
    } else {
        err.into()
    }
}

/// Generates the lookup, add and remove operations for one kind of favorite
/// link.
macro_rules! impl_favorite_ops {
    (
        $find_fn:ident,
        $add_fn:ident,
        $remove_fn:ident,
        $link:ident,
        $target:ident,
        $field:ident,
        $column:ident,
        $label:literal,
        $missing:literal
    ) => {
        async fn $find_fn(
            &self,
            user_id: i32,
            target_id: i32,
        ) -> ResultEngine<Option<$link::Model>> {
            $link::Entity::find()
                .filter($link::Column::UserId.eq(user_id))
                .filter($link::Column::$column.eq(target_id))
                .one(&self.database)
                .await
                .map_err(Into::into)
        }

        /// Record a new favorite and return the id of the link.
        ///
        /// The target must exist and the pair must not be linked already.
        pub async fn $add_fn(&self, user_id: i32, target_id: i32) -> ResultEngine<i32> {
            if $target::Entity::find_by_id(target_id)
                .one(&self.database)
                .await?
                .is_none()
            {
                return Err(EngineError::KeyNotFound(
                    concat!($label, " not found").to_string(),
                ));
            }

            if self.$find_fn(user_id, target_id).await?.is_some() {
                return Err(EngineError::ExistingKey(
                    concat!($label, " already in favorites").to_string(),
                ));
            }

            let link = $link::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                $field: ActiveValue::Set(target_id),
                ..Default::default()
            };

            match link.insert(&self.database).await {
                Ok(model) => {
                    tracing::debug!(user_id, target_id, link_id = model.id, "favorite added");
                    Ok(model.id)
                }
                Err(err) => Err(insert_error(err, concat!($label, " already in favorites"))),
            }
        }

        /// Drop an existing favorite.
        pub async fn $remove_fn(&self, user_id: i32, target_id: i32) -> ResultEngine<()> {
            let Some(link) = self.$find_fn(user_id, target_id).await? else {
                return Err(EngineError::KeyNotFound($missing.to_string()));
            };

            let res = $link::Entity::delete_by_id(link.id)
                .exec(&self.database)
                .await?;
            if res.rows_affected == 0 {
                return Err(EngineError::KeyNotFound($missing.to_string()));
            }

            tracing::debug!(user_id, target_id, link_id = link.id, "favorite removed");
            Ok(())
        }
    };
}

impl Engine {
    impl_favorite_ops!(
        favorite_person_link,
        add_favorite_person,
        remove_favorite_person,
        favorite_people,
        people,
        people_id,
        PeopleId,
        "Person",
        "Favorite person not found"
    );

    impl_favorite_ops!(
        favorite_planet_link,
        add_favorite_planet,
        remove_favorite_planet,
        favorite_planets,
        planets,
        planet_id,
        PlanetId,
        "Planet",
        "Favorite planet not found"
    );

    /// Lists the favorites of `user_id`, oldest first.
    ///
    /// The user itself is not required to exist: an unknown id simply has no
    /// favorites.
    pub async fn favorites(&self, user_id: i32) -> ResultEngine<Favorites> {
        let people = favorite_people::Entity::find()
            .filter(favorite_people::Column::UserId.eq(user_id))
            .order_by_asc(favorite_people::Column::Id)
            .find_also_related(people::Entity)
            .all(&self.database)
            .await?
            .into_iter()
            .filter_map(|(link, person)| match person {
                Some(person) => Some(FavoritePerson::new(link, person)),
                None => {
                    tracing::warn!(link_id = link.id, "favorite references a missing person");
                    None
                }
            })
            .collect();

        let planets = favorite_planets::Entity::find()
            .filter(favorite_planets::Column::UserId.eq(user_id))
            .order_by_asc(favorite_planets::Column::Id)
            .find_also_related(planets::Entity)
            .all(&self.database)
            .await?
            .into_iter()
            .filter_map(|(link, planet)| match planet {
                Some(planet) => Some(FavoritePlanet::new(link, planet)),
                None => {
                    tracing::warn!(link_id = link.id, "favorite references a missing planet");
                    None
                }
            })
            .collect();

        Ok(Favorites { people, planets })
    }
}

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

    use super::*;

    async fn db_with_planet() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "INSERT INTO planets (name) VALUES ('Tatooine')",
        ))
        .await
        .unwrap();
        db
    }

    fn planet_link(user_id: i32, planet_id: i32) -> favorite_planets::ActiveModel {
        favorite_planets::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn concurrent_duplicate_insert_is_existing_key() {
        let db = db_with_planet().await;

        planet_link(1, 1).insert(&db).await.unwrap();
        let err = planet_link(1, 1).insert(&db).await.unwrap_err();
        assert!(is_unique_violation(&err));

        assert_eq!(
            insert_error(err, "Planet already in favorites"),
            EngineError::ExistingKey("Planet already in favorites".to_string())
        );
    }

    #[test]
    fn other_insert_failures_stay_database_errors() {
        let err = insert_error(
            DbErr::Custom("disk full".to_string()),
            "Planet already in favorites",
        );
        assert!(matches!(err, EngineError::Database(_)));
    }
}
