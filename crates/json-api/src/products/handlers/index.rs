//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    errors::ErrorResponse, extensions::*, products::errors::into_error_response,
    products::get::ProductResponse, state::State,
};

/// Product Index Handler
///
/// Lists every product in id order, or only those whose description contains
/// `description` when that query parameter is given.
#[endpoint(tags("produits"), summary = "List Products")]
#[tracing::instrument(name = "produits.index", skip_all)]
pub(crate) async fn handler(
    description: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ErrorResponse> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let products = &state.app.products;

    let products = match description.into_inner() {
        Some(keyword) => products.search_products(keyword).await,
        None => products.list_products().await,
    }
    .map_err(into_error_response)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
