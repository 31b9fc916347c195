use crate::error::ApiError;
use crate::models::room::{Room, RoomInput};
use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

pub async fn get_rooms(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let habitaciones =
        sqlx::query_as::<_, Room>("SELECT codigo, numero, tipo, valor FROM habitaciones")
            .fetch_all(pool.get_ref())
            .await
            .map_err(ApiError::store("consultar los registros"))?;

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": format!("Se encontraron {} registros", habitaciones.len()),
        "habitaciones": habitaciones,
    })))
}

pub async fn get_room_by_codigo(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let codigo = path.into_inner();

    let habitacion = sqlx::query_as::<_, Room>(
        "SELECT codigo, numero, tipo, valor FROM habitaciones WHERE codigo = ?",
    )
    .bind(codigo)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(ApiError::store("consultar los registros"))?
    .ok_or_else(|| {
        ApiError::NotFound(format!("No se encontró la habitación con el código {codigo}"))
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": "Se encontro el registro en la base de datos",
        "habitaciones": habitacion,
    })))
}

pub async fn create_room(
    pool: web::Data<SqlitePool>,
    body: web::Json<RoomInput>,
) -> Result<HttpResponse, ApiError> {
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    let result = sqlx::query("INSERT INTO habitaciones (numero, tipo, valor) VALUES (?, ?, ?)")
        .bind(&body.numero)
        .bind(&body.tipo)
        .bind(body.valor)
        .execute(pool.get_ref())
        .await
        .map_err(ApiError::store("insertar el registro"))?;

    Ok(HttpResponse::Created().json(json!({
        "mensaje": "Habitación creada",
        "codigo": result.last_insert_rowid(),
    })))
}

pub async fn update_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<RoomInput>,
) -> Result<HttpResponse, ApiError> {
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    let codigo = path.into_inner();

    // Unconditional update: a codigo that matches nothing still answers 200.
    let result =
        sqlx::query("UPDATE habitaciones SET numero = ?, tipo = ?, valor = ? WHERE codigo = ?")
            .bind(&body.numero)
            .bind(&body.tipo)
            .bind(body.valor)
            .bind(codigo)
            .execute(pool.get_ref())
            .await
            .map_err(ApiError::store("actualizar el registro"))?;

    log::debug!("habitacion {codigo}: {} filas actualizadas", result.rows_affected());

    Ok(HttpResponse::Ok().json(json!({ "mensaje": "Habitación actualizada" })))
}

pub async fn delete_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let codigo = path.into_inner();

    let result = sqlx::query("DELETE FROM habitaciones WHERE codigo = ?")
        .bind(codigo)
        .execute(pool.get_ref())
        .await
        .map_err(ApiError::store("eliminar el registro"))?;

    log::debug!("habitacion {codigo}: {} filas eliminadas", result.rows_affected());

    Ok(HttpResponse::Ok().json(json!({ "mensaje": "Habitación eliminada" })))
}
