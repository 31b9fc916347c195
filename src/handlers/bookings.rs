use crate::error::ApiError;
use crate::models::booking::{Booking, BookingInput, BookingView};
use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

const SELECT_RESERVAS: &str = "SELECT codigo, codigo_habitacion, nombre_cliente, \
     telefono_cliente, fecha_reservacion, fecha_entrada, fecha_salida FROM reservas";

pub async fn get_bookings(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let reservas = sqlx::query_as::<_, Booking>(SELECT_RESERVAS)
        .fetch_all(pool.get_ref())
        .await
        .map_err(ApiError::store("consultar los registros"))?;

    // Timestamps go out as es-CO display strings, never raw values.
    let reservas: Vec<BookingView> = reservas.into_iter().map(BookingView::from).collect();

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": format!("Se encontraron {} registros", reservas.len()),
        "reservas": reservas,
    })))
}

pub async fn get_booking_by_codigo(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let codigo = path.into_inner();

    let reserva =
        sqlx::query_as::<_, Booking>(&format!("{SELECT_RESERVAS} WHERE codigo = ?"))
            .bind(codigo)
            .fetch_optional(pool.get_ref())
            .await
            .map_err(ApiError::store("consultar los registros"))?
            .ok_or_else(|| {
                ApiError::NotFound(format!("No se encontró la reserva con el código {codigo}"))
            })?;

    Ok(HttpResponse::Ok().json(json!({
        "mensaje": "Se encontro el registro en la base de datos",
        "reservas": BookingView::from(reserva),
    })))
}

pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    body: web::Json<BookingInput>,
) -> Result<HttpResponse, ApiError> {
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    let result = sqlx::query(
        "INSERT INTO reservas (codigo_habitacion, nombre_cliente, telefono_cliente, \
         fecha_reservacion, fecha_entrada, fecha_salida) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(body.codigo_habitacion)
    .bind(&body.nombre_cliente)
    .bind(&body.telefono_cliente)
    .bind(body.fecha_reservacion)
    .bind(body.fecha_entrada)
    .bind(body.fecha_salida)
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::store("insertar el registro"))?;

    Ok(HttpResponse::Created().json(json!({
        "mensaje": "Reserva creada",
        "codigo": result.last_insert_rowid(),
    })))
}

pub async fn update_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<BookingInput>,
) -> Result<HttpResponse, ApiError> {
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    let codigo = path.into_inner();

    // Unconditional update: a codigo that matches nothing still answers 200.
    let result = sqlx::query(
        "UPDATE reservas SET codigo_habitacion = ?, nombre_cliente = ?, telefono_cliente = ?, \
         fecha_reservacion = ?, fecha_entrada = ?, fecha_salida = ? WHERE codigo = ?",
    )
    .bind(body.codigo_habitacion)
    .bind(&body.nombre_cliente)
    .bind(&body.telefono_cliente)
    .bind(body.fecha_reservacion)
    .bind(body.fecha_entrada)
    .bind(body.fecha_salida)
    .bind(codigo)
    .execute(pool.get_ref())
    .await
    .map_err(ApiError::store("actualizar el registro"))?;

    log::debug!("reserva {codigo}: {} filas actualizadas", result.rows_affected());

    Ok(HttpResponse::Ok().json(json!({ "mensaje": "Reserva actualizada" })))
}

pub async fn delete_booking(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let codigo = path.into_inner();

    let result = sqlx::query("DELETE FROM reservas WHERE codigo = ?")
        .bind(codigo)
        .execute(pool.get_ref())
        .await
        .map_err(ApiError::store("eliminar el registro"))?;

    log::debug!("reserva {codigo}: {} filas eliminadas", result.rows_affected());

    Ok(HttpResponse::Ok().json(json!({ "mensaje": "Reserva eliminada" })))
}

#[cfg(test)]
mod tests {
    use crate::handlers;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    macro_rules! app {
        ($pool:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($pool.clone()))
                    .configure(handlers::config),
            )
            .await
        };
    }

    fn reserva_valida() -> Value {
        json!({
            "codigo_habitacion": 1,
            "nombre_cliente": "Ana Torres",
            "telefono_cliente": "3001234567",
            "fecha_reservacion": "2024-11-20T09:15:00",
            "fecha_entrada": "2024-12-01T15:00:00",
            "fecha_salida": "2024-12-05T11:00:00"
        })
    }

    #[actix_web::test]
    async fn created_booking_resolves_with_formatted_dates() {
        let pool = test_pool().await;
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/bookings")
            .set_json(reserva_valida())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mensaje"], "Reserva creada");
        let codigo = body["codigo"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/bookings/{codigo}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let reserva = &body["reservas"];
        assert_eq!(reserva["codigo"], codigo);
        assert_eq!(reserva["nombre_cliente"], "Ana Torres");
        assert_eq!(reserva["fecha_reservacion"], "20/11/2024, 9:15:00 a. m.");
        assert_eq!(reserva["fecha_entrada"], "1/12/2024, 3:00:00 p. m.");
        assert_eq!(reserva["fecha_salida"], "5/12/2024, 11:00:00 a. m.");
    }

    #[actix_web::test]
    async fn list_formats_every_timestamp() {
        let pool = test_pool().await;
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/bookings")
            .set_json(reserva_valida())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        let req = test::TestRequest::get().uri("/bookings").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["mensaje"], "Se encontraron 1 registros");
        let reservas = body["reservas"].as_array().unwrap();
        assert_eq!(reservas.len(), 1);

        // Display strings, not ISO values.
        let fecha = reservas[0]["fecha_entrada"].as_str().unwrap();
        assert!(fecha.contains(", "), "expected display format, got {fecha}");
        assert!(!fecha.contains('T'), "expected display format, got {fecha}");
    }

    #[actix_web::test]
    async fn missing_booking_is_404() {
        let pool = test_pool().await;
        let app = app!(pool);

        let req = test::TestRequest::get().uri("/bookings/77").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mensaje"], "No se encontró la reserva con el código 77");
    }

    #[actix_web::test]
    async fn update_rewrites_full_field_set() {
        let pool = test_pool().await;
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/bookings")
            .set_json(reserva_valida())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let codigo = body["codigo"].as_i64().unwrap();

        let mut cambios = reserva_valida();
        cambios["nombre_cliente"] = json!("Carlos Ruiz");
        cambios["fecha_salida"] = json!("2024-12-07T10:00:00");

        let req = test::TestRequest::patch()
            .uri(&format!("/bookings/{codigo}"))
            .set_json(cambios)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/bookings/{codigo}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["reservas"]["nombre_cliente"], "Carlos Ruiz");
        assert_eq!(body["reservas"]["fecha_salida"], "7/12/2024, 10:00:00 a. m.");
    }

    #[actix_web::test]
    async fn update_missing_booking_still_200() {
        let pool = test_pool().await;
        let app = app!(pool);

        let req = test::TestRequest::patch()
            .uri("/bookings/77")
            .set_json(reserva_valida())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/bookings/77").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn delete_is_idempotent() {
        let pool = test_pool().await;
        let app = app!(pool);

        let req = test::TestRequest::post()
            .uri("/bookings")
            .set_json(reserva_valida())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let codigo = body["codigo"].as_i64().unwrap();

        for _ in 0..2 {
            let req = test::TestRequest::delete()
                .uri(&format!("/bookings/{codigo}"))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }
    }

    #[actix_web::test]
    async fn blank_client_name_is_rejected() {
        let pool = test_pool().await;
        let app = app!(pool);

        let mut reserva = reserva_valida();
        reserva["nombre_cliente"] = json!("");

        let req = test::TestRequest::post()
            .uri("/bookings")
            .set_json(reserva)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}
