//! App Router

use salvo::Router;

use crate::products;

/// Product routes: the collection lives at `/produits`, single items under
/// `/produit`.
pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("produits").get(products::index::handler))
        .push(
            Router::with_path("produit")
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
