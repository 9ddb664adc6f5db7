use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{catch, Request};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::sim_db::DataStoreError;

/// JSON body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    fn with_status(message: impl Into<String>, status: Status) -> Self {
        ErrorBody {
            message: message.into(),
            error: Some(json!({ "status": status.code })),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing `title` in request body")]
    MissingTitle,

    #[error(transparent)]
    Store(#[from] DataStoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MissingTitle => Status::BadRequest,
            ApiError::Store(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let body = ErrorBody::with_status(self.to_string(), status);
        (status, Json(body)).respond_to(request)
    }
}

// Catchers ////////////////////////////////////////////////////////////////////////////////////////

#[catch(404)]
pub fn not_found() -> (Status, Json<ErrorBody>) {
    let body = ErrorBody {
        message: "Not Found".to_string(),
        error: None,
    };
    (Status::NotFound, Json(body))
}

#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    (status, Json(ErrorBody::with_status(status.reason_lossy(), status)))
}
