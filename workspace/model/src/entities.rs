//! This file serves as the root for all SeaORM entity modules.
//! The data models mirror the blog's relational schema: users, the two
//! kinds of likeable records, and the favorites join table between them.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::favorite::Entity as Favorite;
    pub use super::person::Entity as Person;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}
