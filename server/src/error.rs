use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use lexp_providers::criteria::CriteriaError;

use crate::routes::LOGIN_ROUTE;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Enter at least one search criteria (Job Title, Company, or Skills)")]
    MissingCriteria,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] CriteriaError),

    #[error("No such profile in the current results")]
    NoSuchProfile,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingCriteria => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::InvalidFilter { .. } => StatusCode::BAD_REQUEST,
            AppError::NoSuchProfile => StatusCode::NOT_FOUND,
        };

        // The login redirect rides along on auth failures so the dashboard
        // knows where to send the user.
        let body = match self {
            AppError::Unauthenticated => {
                json!({ "error": self.to_string(), "redirect": LOGIN_ROUTE })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
