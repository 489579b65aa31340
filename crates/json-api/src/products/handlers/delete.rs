//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use produit_app::domain::products::records::ProductId;

use crate::{
    errors::ErrorResponse, extensions::*, products::errors::into_error_response, state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("produits"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
    ),
)]
#[tracing::instrument(name = "produits.delete", skip_all, fields(product_id = *id))]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ErrorResponse> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(ProductId::from_i64(id.into_inner()))
        .await
        .map_err(into_error_response)?;

    tracing::info!("deleted product");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use produit_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{errors::ErrorBody, products::errors::NOT_FOUND_MESSAGE, test_helpers::products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("produit/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_returns_204_empty_body() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| id.into_i64() == 1)
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete("http://example.com/produit/1")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(res.take_string().await?.is_empty(), "expected empty body");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404_message() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/produit/9")
            .send(&make_service(products))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, NOT_FOUND_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_delete_product().never();

        let res = TestClient::delete("http://example.com/produit/abc")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
