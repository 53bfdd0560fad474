use actix_web::HttpResponse;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum ServerError {
    DieselError,
    EnvironmentError,
    R2D2Error,
    #[display(fmt = "note id: {} was not found", _0)]
    NotFound(i32),
}

impl From<r2d2::Error> for ServerError {
    fn from(_: r2d2::Error) -> ServerError {
        ServerError::R2D2Error
    }
}

impl From<std::env::VarError> for ServerError {
    fn from(_: std::env::VarError) -> ServerError {
        ServerError::EnvironmentError
    }
}

impl From<diesel::result::Error> for ServerError {
    fn from(e: diesel::result::Error) -> ServerError {
        log::error!("{e}");
        ServerError::DieselError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::DieselError => {
                HttpResponse::InternalServerError().body("Library Error: Diesel Error.")
            }
            ServerError::EnvironmentError => HttpResponse::InternalServerError()
                .body("Server Error: Use of an uninitialized environment variable."),
            ServerError::R2D2Error => {
                HttpResponse::InternalServerError().body("Server Error: Pooling Error.")
            }
            ServerError::NotFound(_) => HttpResponse::NotFound().finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn missing_id_becomes_404_with_empty_body() {
        let res = ServerError::NotFound(99999).error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_and_pool_failures_become_500() {
        assert_eq!(
            ServerError::DieselError.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::R2D2Error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
