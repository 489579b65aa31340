//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use produit_app::domain::products::{data::ProductUpdate, records::ProductId};

use crate::{
    errors::ErrorResponse,
    extensions::*,
    products::{create::ProductRequest, errors::into_error_response, get::ProductResponse},
    state::State,
};

/// Update Product Handler
///
/// Replaces every field of an existing product. The path id wins over any id
/// in the body.
#[endpoint(tags("produits"), summary = "Update Product")]
#[tracing::instrument(
    name = "produits.update",
    skip_all,
    fields(product_id = *id, nom = tracing::field::Empty)
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ErrorResponse> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if let Some(nom) = &request.nom {
        tracing::Span::current().record("nom", nom.as_str());
    }

    let product = state
        .app
        .products
        .update_product(ProductUpdate {
            id: ProductId::from_i64(id.into_inner()),
            product: request.into(),
        })
        .await
        .map_err(into_error_response)?;

    tracing::info!(product_id = %product.id, "updated product");

    Ok(Json(product.into()))
}
