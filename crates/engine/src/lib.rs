//! Domain layer of Holonet.
//!
//! [`Engine`] wraps the database handle and exposes every lookup and
//! mutation the HTTP layer needs. Entities are private to the crate; callers
//! only see the plain domain types re-exported below.

pub use error::EngineError;
pub use favorite_people::FavoritePerson;
pub use favorite_planets::FavoritePlanet;
pub use ops::{Engine, EngineBuilder, Favorites};
pub use people::Person;
pub use planets::Planet;
pub use users::User;

mod error;
mod favorite_people;
mod favorite_planets;
mod ops;
mod people;
mod planets;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
