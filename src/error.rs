use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Every query failure resolves here at the handler boundary; nothing
/// propagates further and nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error al {accion} en la base de datos")]
    Store {
        accion: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Wraps a driver error with the action phrase used in the response
    /// message ("consultar los registros", "insertar el registro", ...).
    pub fn store(accion: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| ApiError::Store { accion, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store { accion, source } = self {
            // The driver detail stays in the log; the client only sees
            // the generic message.
            log::error!("fallo al {accion}: {source}");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "mensaje": self.to_string(),
        }))
    }
}
