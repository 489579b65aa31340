//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use produit_app::domain::products::data::ProductDraft;

use crate::{
    errors::ErrorResponse, extensions::*, products::errors::into_error_response,
    products::get::ProductResponse, state::State,
};

/// Product payload for create and full replace. Any `id` field is ignored.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name, required and non-empty
    pub nom: Option<String>,

    /// At least 20 characters
    pub description: Option<String>,

    /// Zero or positive
    #[salvo(schema(value_type = Option<f64>))]
    pub prix: Option<Decimal>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        ProductDraft {
            nom: request.nom,
            description: request.description,
            prix: request.prix,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("produits"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
#[tracing::instrument(
    name = "produits.create",
    skip_all,
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ErrorResponse> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_error_response)?;

    tracing::Span::current().record("product_id", product.id.into_i64());

    res.add_header(LOCATION, format!("/produit/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use produit_app::domain::products::{
        MockProductsService, ProductValidationError, ProductsServiceError,
    };

    use crate::{
        errors::ErrorBody,
        products::errors::{DESCRIPTION_TOO_SHORT_MESSAGE, NAME_REQUIRED_MESSAGE},
        test_helpers::products_service,
    };

    use super::{super::tests::*, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("produit").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_location() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|draft| {
                *draft
                    == ProductDraft {
                        nom: Some("Stylo".to_owned()),
                        description: Some(STYLO_DESCRIPTION.to_owned()),
                        prix: Some(Decimal::new(15, 1)),
                    }
            })
            .return_once(|_| Ok(make_product(1)));

        let mut res = TestClient::post("http://example.com/produit")
            .json(&json!({ "nom": "Stylo", "description": STYLO_DESCRIPTION, "prix": 1.5 }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/produit/1"));
        assert_eq!(body.id, 1);
        assert_eq!(body.nom, "Stylo");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_ignores_payload_id() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Ok(make_product(7)));

        let mut res = TestClient::post("http://example.com/produit")
            .json(&json!({
                "id": 99,
                "nom": "Stylo",
                "description": STYLO_DESCRIPTION,
                "prix": "1.50"
            }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_missing_fields_reach_validation() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|draft| *draft == ProductDraft::default())
            .return_once(|_| {
                Err(ProductsServiceError::Invalid(
                    ProductValidationError::NameRequired,
                ))
            });

        let mut res = TestClient::post("http://example.com/produit")
            .json(&json!({}))
            .send(&make_service(products))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, NAME_REQUIRED_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_short_description_returns_400_message() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Invalid(
                ProductValidationError::DescriptionTooShort,
            ))
        });

        let mut res = TestClient::post("http://example.com/produit")
            .json(&json!({ "nom": "Stylo", "description": "court", "prix": 1 }))
            .send(&make_service(products))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, DESCRIPTION_TOO_SHORT_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_malformed_json_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/produit")
            .raw_json("{ not json")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
