use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum OrderingError {
    #[error("Customer not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderingResult<T> = Result<T, OrderingError>;

impl From<OrderingError> for AppError {
    fn from(err: OrderingError) -> Self {
        match err {
            OrderingError::NotFound(id) => {
                AppError::NotFound(format!("Customer {} not found", id))
            }
            OrderingError::Validation(errors) => AppError::ValidationError(errors),
            OrderingError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrderingError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for OrderingError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderingError::Database(err.to_string())
    }
}
