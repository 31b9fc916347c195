use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub mod bookings;
pub mod rooms;

/// Route directory served at the root path.
pub async fn index() -> impl Responder {
    let apis = json!({
        "habitaciones": {
            "obtener": { "metodo": "GET", "descripcion": "Obtener todas las habitaciones", "ruta": "/rooms" },
            "obtenerPorCodigo": { "metodo": "GET", "descripcion": "Obtener una habitación por su código", "ruta": "/rooms/:codigo" },
            "crear": { "metodo": "POST", "descripcion": "Crear una habitación", "ruta": "/rooms" },
            "actualizar": { "metodo": "PATCH", "descripcion": "Actualizar una habitación", "ruta": "/rooms/:codigo" },
            "eliminar": { "metodo": "DELETE", "descripcion": "Eliminar una habitación", "ruta": "/rooms/:codigo" }
        },
        "reservas": {
            "obtener": { "metodo": "GET", "descripcion": "Obtener todas las reservas", "ruta": "/bookings" },
            "obtenerPorCodigo": { "metodo": "GET", "descripcion": "Obtener una reserva por su código", "ruta": "/bookings/:codigo" },
            "crear": { "metodo": "POST", "descripcion": "Crear una reserva", "ruta": "/bookings" },
            "actualizar": { "metodo": "PATCH", "descripcion": "Actualizar una reserva", "ruta": "/bookings/:codigo" },
            "eliminar": { "metodo": "DELETE", "descripcion": "Eliminar una reserva", "ruta": "/bookings/:codigo" }
        }
    });

    HttpResponse::Ok().json(json!({
        "mensaje": "Bienvenido al sistema de gestión de habitaciones y reservas, estas son las rutas disponibles",
        "apis": apis,
    }))
}

/// Full route table, shared between the server and the tests.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::scope("/rooms")
                .route("", web::get().to(rooms::get_rooms))
                .route("", web::post().to(rooms::create_room))
                .route("/{codigo}", web::get().to(rooms::get_room_by_codigo))
                .route("/{codigo}", web::patch().to(rooms::update_room))
                .route("/{codigo}", web::delete().to(rooms::delete_room)),
        )
        .service(
            web::scope("/bookings")
                .route("", web::get().to(bookings::get_bookings))
                .route("", web::post().to(bookings::create_booking))
                .route("/{codigo}", web::get().to(bookings::get_booking_by_codigo))
                .route("/{codigo}", web::patch().to(bookings::update_booking))
                .route("/{codigo}", web::delete().to(bookings::delete_booking)),
        );
}
