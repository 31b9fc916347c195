use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub codigo: i64,
    pub codigo_habitacion: i64,
    pub nombre_cliente: String,
    pub telefono_cliente: String,
    pub fecha_reservacion: NaiveDateTime,
    pub fecha_entrada: NaiveDateTime,
    pub fecha_salida: NaiveDateTime,
}

/// Body for POST /bookings and PATCH /bookings/{codigo}. The entrada/salida
/// ordering is not checked; the store accepts whatever the client sends.
#[derive(Debug, Deserialize, Validate)]
pub struct BookingInput {
    pub codigo_habitacion: i64,
    #[validate(length(min = 1))]
    pub nombre_cliente: String,
    #[validate(length(min = 1))]
    pub telefono_cliente: String,
    pub fecha_reservacion: NaiveDateTime,
    pub fecha_entrada: NaiveDateTime,
    pub fecha_salida: NaiveDateTime,
}

/// Presentation shape for list/get responses: same fields as `Booking`
/// but with the timestamps already formatted for display.
#[derive(Debug, Serialize)]
pub struct BookingView {
    pub codigo: i64,
    pub codigo_habitacion: i64,
    pub nombre_cliente: String,
    pub telefono_cliente: String,
    pub fecha_reservacion: String,
    pub fecha_entrada: String,
    pub fecha_salida: String,
}

impl From<Booking> for BookingView {
    fn from(reserva: Booking) -> Self {
        BookingView {
            codigo: reserva.codigo,
            codigo_habitacion: reserva.codigo_habitacion,
            nombre_cliente: reserva.nombre_cliente,
            telefono_cliente: reserva.telefono_cliente,
            fecha_reservacion: formato_es_co(reserva.fecha_reservacion),
            fecha_entrada: formato_es_co(reserva.fecha_entrada),
            fecha_salida: formato_es_co(reserva.fecha_salida),
        }
    }
}

/// Colombian display format, `D/M/YYYY, h:mm:ss a. m.`: day, month and
/// hour unpadded, 12-hour clock, Spanish meridiem with periods.
pub fn formato_es_co(fecha: NaiveDateTime) -> String {
    let (hora, meridiano) = match fecha.hour() {
        0 => (12, "a. m."),
        h @ 1..=11 => (h, "a. m."),
        12 => (12, "p. m."),
        h => (h - 12, "p. m."),
    };

    format!(
        "{}/{}/{}, {}:{:02}:{:02} {}",
        fecha.day(),
        fecha.month(),
        fecha.year(),
        hora,
        fecha.minute(),
        fecha.second(),
        meridiano
    )
}
