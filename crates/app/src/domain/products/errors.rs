//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Schema constraint backing the "name is required" rule.
pub const NOM_REQUIRED_CONSTRAINT: &str = "produit_nom_required";

/// Schema constraint backing the minimum description length rule.
pub const DESCRIPTION_MIN_LENGTH_CONSTRAINT: &str = "produit_description_min_length";

/// Schema constraint backing the non-negative price rule.
pub const PRIX_NON_NEGATIVE_CONSTRAINT: &str = "produit_prix_non_negative";

/// Business rule broken by a candidate product. Only the first broken rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("description must contain at least 20 characters")]
    DescriptionTooShort,

    #[error("price must be zero or positive")]
    NegativePrice,
}

impl ProductValidationError {
    /// Map a schema constraint name onto the business rule it enforces.
    pub fn from_constraint(constraint: &str) -> Option<Self> {
        match constraint {
            NOM_REQUIRED_CONSTRAINT => Some(Self::NameRequired),
            DESCRIPTION_MIN_LENGTH_CONSTRAINT => Some(Self::DescriptionTooShort),
            PRIX_NON_NEGATIVE_CONSTRAINT => Some(Self::NegativePrice),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid product: {0}")]
    Invalid(#[from] ProductValidationError),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        error
            .as_database_error()
            .and_then(classify_database_error)
            .unwrap_or_else(|| Self::Sql(error))
    }
}

fn classify_database_error(error: &dyn DatabaseError) -> Option<ProductsServiceError> {
    match error.kind() {
        ErrorKind::CheckViolation => Some(
            error
                .constraint()
                .and_then(ProductValidationError::from_constraint)
                .map_or_else(
                    || ProductsServiceError::ConstraintViolation(error.message().to_owned()),
                    ProductsServiceError::Invalid,
                ),
        ),
        ErrorKind::NotNullViolation => Some(ProductsServiceError::ConstraintViolation(
            error.message().to_owned(),
        )),
        _ => None,
    }
}
