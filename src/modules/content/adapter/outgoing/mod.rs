pub mod local;
pub mod postgres;
pub mod sea_orm_entity;
