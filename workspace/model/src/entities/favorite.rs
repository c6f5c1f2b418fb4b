use super::{person, planet, user};
use sea_orm::entity::prelude::*;

/// Join row linking a user to one liked entity, a person or a planet.
///
/// Only one of `planet_id`/`people_id` is meant to be set per row, but the
/// schema does not enforce it, and neither pair is unique. Duplicate
/// favorites are possible.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::UserId",
        to = "user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "planet::Entity",
        from = "Column::PlanetId",
        to = "planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "person::Entity",
        from = "Column::PeopleId",
        to = "person::Column::Id"
    )]
    Person,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
