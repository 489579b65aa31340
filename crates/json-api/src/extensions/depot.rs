//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;
use tracing::error;

use crate::errors::ErrorResponse;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ErrorResponse>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ErrorResponse> {
        self.obtain::<T>().map_err(|_missing| {
            error!("depot has no {}", std::any::type_name::<T>());

            ErrorResponse::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_value_is_internal_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert_eq!(
            result.map_err(|error| error.status()),
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn present_value_is_returned() {
        let mut depot = Depot::new();

        depot.inject(42_u32);

        assert_eq!(depot.obtain_or_500::<u32>().ok(), Some(&42));
    }
}
