use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub codigo: i64,
    pub numero: String,
    pub tipo: String,
    pub valor: f64,
}

/// Body for POST /rooms and PATCH /rooms/{codigo}.
#[derive(Debug, Deserialize, Validate)]
pub struct RoomInput {
    #[validate(length(min = 1))]
    pub numero: String,
    #[validate(length(min = 1))]
    pub tipo: String,
    #[validate(range(min = 0.0))]
    pub valor: f64,
}
