use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    seed(&db).await;
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn seed(db: &DatabaseConnection) {
    let backend = db.get_database_backend();
    let rows: [(&str, Vec<sea_orm::Value>); 5] = [
        (
            "INSERT INTO users (email, password, is_active) VALUES (?, ?, ?)",
            vec!["luke@rebels.org".into(), "x-wing".into(), true.into()],
        ),
        (
            "INSERT INTO users (email, password, is_active) VALUES (?, ?, ?)",
            vec!["leia@rebels.org".into(), "alderaan".into(), false.into()],
        ),
        (
            "INSERT INTO people (name, height, mass, hair_color, skin_color) VALUES (?, ?, ?, ?, ?)",
            vec![
                "Luke Skywalker".into(),
                "172".into(),
                "77".into(),
                "blond".into(),
                "fair".into(),
            ],
        ),
        (
            "INSERT INTO people (name) VALUES (?)",
            vec!["C-3PO".into()],
        ),
        (
            "INSERT INTO planets (name, diameter, population, climate) VALUES (?, ?, ?, ?)",
            vec![
                "Tatooine".into(),
                "10465".into(),
                "200000".into(),
                "arid".into(),
            ],
        ),
    ];

    for (sql, values) in rows {
        db.execute(Statement::from_sql_and_values(backend, sql, values))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn listings_follow_storage_order() {
    let (engine, _db) = engine_with_db().await;

    let people = engine.list_people().await.unwrap();
    assert_eq!(
        people.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        ["Luke Skywalker", "C-3PO"]
    );
    assert_eq!(people[1].height, None);

    let planets = engine.list_planets().await.unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].climate.as_deref(), Some("arid"));

    let users = engine.list_users().await.unwrap();
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(users[0].email, "luke@rebels.org");
}

#[tokio::test]
async fn lookup_by_id() {
    let (engine, _db) = engine_with_db().await;

    let luke = engine.person(1).await.unwrap();
    assert_eq!(luke.id, 1);
    assert_eq!(luke.mass.as_deref(), Some("77"));

    let tatooine = engine.planet(1).await.unwrap();
    assert_eq!(tatooine.name, "Tatooine");

    assert_eq!(
        engine.person(999_999).await.unwrap_err(),
        EngineError::KeyNotFound("Person not found".to_string())
    );
    assert_eq!(
        engine.planet(42).await.unwrap_err(),
        EngineError::KeyNotFound("Planet not found".to_string())
    );
}

#[tokio::test]
async fn favorites_start_empty() {
    let (engine, _db) = engine_with_db().await;

    let favorites = engine.favorites(1).await.unwrap();
    assert!(favorites.people.is_empty());
    assert!(favorites.planets.is_empty());
}

#[tokio::test]
async fn added_favorites_are_listed_with_their_target() {
    let (engine, _db) = engine_with_db().await;

    engine.add_favorite_person(1, 2).await.unwrap();
    engine.add_favorite_person(1, 1).await.unwrap();
    engine.add_favorite_planet(1, 1).await.unwrap();

    let favorites = engine.favorites(1).await.unwrap();
    let names: Vec<_> = favorites
        .people
        .iter()
        .map(|f| f.person.name.as_str())
        .collect();
    assert_eq!(names, ["C-3PO", "Luke Skywalker"]);
    assert_eq!(favorites.people[0].people_id(), 2);
    assert_eq!(favorites.people[0].user_id, 1);

    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].planet_id(), 1);
    assert_eq!(favorites.planets[0].planet.name, "Tatooine");

    // Other users do not see them.
    let other = engine.favorites(2).await.unwrap();
    assert!(other.people.is_empty());
    assert!(other.planets.is_empty());
}

#[tokio::test]
async fn favorite_for_unseeded_user_is_accepted() {
    let (engine, _db) = engine_with_db().await;

    engine.add_favorite_planet(5, 1).await.unwrap();

    let favorites = engine.favorites(5).await.unwrap();
    assert_eq!(favorites.planets.len(), 1);
}

#[tokio::test]
async fn adding_the_same_favorite_twice_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    engine.add_favorite_planet(1, 1).await.unwrap();
    assert_eq!(
        engine.add_favorite_planet(1, 1).await.unwrap_err(),
        EngineError::ExistingKey("Planet already in favorites".to_string())
    );

    engine.add_favorite_person(1, 1).await.unwrap();
    assert_eq!(
        engine.add_favorite_person(1, 1).await.unwrap_err(),
        EngineError::ExistingKey("Person already in favorites".to_string())
    );

    // Same target, different user is fine.
    engine.add_favorite_planet(2, 1).await.unwrap();
}

#[tokio::test]
async fn adding_a_missing_target_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.add_favorite_planet(1, 7).await.unwrap_err(),
        EngineError::KeyNotFound("Planet not found".to_string())
    );
    assert_eq!(
        engine.add_favorite_person(1, 7).await.unwrap_err(),
        EngineError::KeyNotFound("Person not found".to_string())
    );
}

#[tokio::test]
async fn removing_favorites() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.remove_favorite_planet(1, 1).await.unwrap_err(),
        EngineError::KeyNotFound("Favorite planet not found".to_string())
    );
    assert_eq!(
        engine.remove_favorite_person(1, 1).await.unwrap_err(),
        EngineError::KeyNotFound("Favorite person not found".to_string())
    );

    engine.add_favorite_planet(1, 1).await.unwrap();
    engine.add_favorite_person(1, 1).await.unwrap();

    engine.remove_favorite_planet(1, 1).await.unwrap();
    engine.remove_favorite_person(1, 1).await.unwrap();

    let favorites = engine.favorites(1).await.unwrap();
    assert!(favorites.people.is_empty());
    assert!(favorites.planets.is_empty());

    // Removed links can be added again.
    engine.add_favorite_planet(1, 1).await.unwrap();
}

#[tokio::test]
async fn unique_index_guards_the_pair() {
    let (engine, db) = engine_with_db().await;

    engine.add_favorite_person(1, 1).await.unwrap();

    let backend = db.get_database_backend();
    let res = db
        .execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO favorite_people (user_id, people_id) VALUES (?, ?)",
            vec![1.into(), 1.into()],
        ))
        .await;
    assert!(res.is_err());
}
