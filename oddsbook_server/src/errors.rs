use actix_web::{
    error::{JsonPayloadError, ResponseError},
    http::{header::ContentType, StatusCode},
    HttpRequest,
    HttpResponse,
};
use oddsbook_engine::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Payload deserialization error. {0}")]
    CouldNotDeserializePayload(String),
    #[error("The admin credential header is missing")]
    MissingCredential,
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CouldNotDeserializePayload(_) => StatusCode::BAD_REQUEST,
            Self::MissingCredential => StatusCode::BAD_REQUEST,
            Self::CatalogError(e) => match e {
                CatalogError::Unauthorized => StatusCode::UNAUTHORIZED,
                CatalogError::MatchupNotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::ValidationError(_) => StatusCode::BAD_REQUEST,
            },
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

/// Bodies the server cannot parse are the caller's problem, not an internal fault: report them as
/// 400 with the same JSON error shape as every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServerError::CouldNotDeserializePayload(err.to_string()).into()
}
