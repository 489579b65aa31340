//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use produit_app::domain::products::records::{ProductId, ProductRecord};

use crate::{
    errors::ErrorResponse, extensions::*, products::errors::into_error_response, state::State,
};

/// External view of a product; the price is not exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Storage assigned identifier
    pub id: i64,

    /// Product name
    pub nom: String,

    /// Product description
    pub description: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            nom: product.nom,
            description: product.description,
        }
    }
}

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(tags("produits"), summary = "Get Product")]
#[tracing::instrument(name = "produits.get", skip_all, fields(product_id = *id))]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ErrorResponse> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i64(id.into_inner()))
        .await
        .map_err(into_error_response)?;

    Ok(Json(product.into()))
}
