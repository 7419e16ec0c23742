//! Order taking
//!
//! - [`number`] - order number derivation
//! - [`menu`] - the in-memory menu and index resolution
//! - [`service`] - place / look up / list orders

pub mod menu;
pub mod number;
pub mod service;

pub use menu::Menu;
pub use number::generate_order_number;
pub use service::{OrderForm, OrderService};

use shared::ErrorCode;
use thiserror::Error;

use crate::db::repository::RepoError;

/// Why a submitted form was rejected
///
/// The display text is what the form shows back to the student.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill all fields")]
    MissingFields,

    #[error("Invalid item selected")]
    InvalidItem,
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingFields => ErrorCode::RequiredField,
            ValidationError::InvalidItem => ErrorCode::InvalidMenuItem,
        }
    }
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Order {0} not found")]
    NotFound(String),

    #[error("Invalid staff key")]
    Unauthorized,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::Repo(err.into())
    }
}
