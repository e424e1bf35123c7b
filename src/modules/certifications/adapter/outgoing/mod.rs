pub mod repository_postgres;
pub mod sea_orm_entity;
