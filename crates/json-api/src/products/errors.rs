//! Product Errors

use tracing::error;

use produit_app::domain::products::{ProductValidationError, ProductsServiceError};

use crate::errors::ErrorResponse;

pub(crate) const NOT_FOUND_MESSAGE: &str = "Produit introuvable, malheureusement.";
pub(crate) const NAME_REQUIRED_MESSAGE: &str = "Le nom est obligatoire.";
pub(crate) const DESCRIPTION_TOO_SHORT_MESSAGE: &str =
    "La description doit contenir au moins 20 caractères.";
pub(crate) const NEGATIVE_PRICE_MESSAGE: &str = "Le prix ne doit pas être négatif.";

pub(crate) fn into_error_response(error: ProductsServiceError) -> ErrorResponse {
    match error {
        ProductsServiceError::NotFound => ErrorResponse::not_found(NOT_FOUND_MESSAGE),
        ProductsServiceError::Invalid(invalid) => {
            ErrorResponse::bad_request(validation_message(invalid))
        }
        ProductsServiceError::ConstraintViolation(message) => ErrorResponse::bad_request(message),
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            ErrorResponse::internal_server_error()
        }
    }
}

fn validation_message(error: ProductValidationError) -> &'static str {
    match error {
        ProductValidationError::NameRequired => NAME_REQUIRED_MESSAGE,
        ProductValidationError::DescriptionTooShort => DESCRIPTION_TOO_SHORT_MESSAGE,
        ProductValidationError::NegativePrice => NEGATIVE_PRICE_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use crate::errors::INTERNAL_ERROR_MESSAGE;

    use super::*;

    fn mapped(error: ProductsServiceError) -> (StatusCode, String) {
        let response = into_error_response(error);

        (response.status(), response.message().to_owned())
    }

    #[test]
    fn not_found_is_404_with_french_message() {
        assert_eq!(
            mapped(ProductsServiceError::NotFound),
            (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_owned())
        );
    }

    #[test]
    fn validation_failures_are_400_with_their_message() {
        for (invalid, message) in [
            (ProductValidationError::NameRequired, NAME_REQUIRED_MESSAGE),
            (
                ProductValidationError::DescriptionTooShort,
                DESCRIPTION_TOO_SHORT_MESSAGE,
            ),
            (ProductValidationError::NegativePrice, NEGATIVE_PRICE_MESSAGE),
        ] {
            assert_eq!(
                mapped(ProductsServiceError::Invalid(invalid)),
                (StatusCode::BAD_REQUEST, message.to_owned())
            );
        }
    }

    #[test]
    fn constraint_violation_keeps_its_message() {
        assert_eq!(
            mapped(ProductsServiceError::ConstraintViolation(
                "null value in column \"nom\"".to_owned()
            )),
            (
                StatusCode::BAD_REQUEST,
                "null value in column \"nom\"".to_owned()
            )
        );
    }

    #[test]
    fn storage_failure_is_opaque_500() {
        assert_eq!(
            mapped(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_owned()
            )
        );
    }
}
