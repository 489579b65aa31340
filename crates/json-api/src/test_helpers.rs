//! Test helpers.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, PoisonError},
};

use async_trait::async_trait;
use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use produit_app::{
    context::AppContext,
    domain::products::{
        MockProductsService, ProductsRepository, ProductsService, RepositoryProductsService,
        data::ProductData,
        records::{ProductId, ProductRecord},
    },
};

use crate::{errors::render_status_error, state::State};

pub(crate) fn state_with(products: Arc<dyn ProductsService>) -> Arc<State> {
    State::from_app_context(AppContext { products })
}

/// Wraps `route` the way the server does: shared state plus JSON error bodies.
pub(crate) fn service_with(products: Arc<dyn ProductsService>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with(products))).push(route))
        .catcher(Catcher::default().hoop(render_status_error))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(Arc::new(products), route)
}

/// Products service over an in-memory repository, for multi-request scenarios.
pub(crate) fn in_memory_products() -> Arc<dyn ProductsService> {
    Arc::new(RepositoryProductsService::new(InMemoryProductsRepository::default()))
}

#[derive(Debug, Default)]
struct InMemoryProductsRepository {
    rows: Mutex<Rows>,
}

#[derive(Debug, Default)]
struct Rows {
    last_id: i64,
    products: BTreeMap<i64, ProductRecord>,
}

impl InMemoryProductsRepository {
    fn with_rows<R>(&self, f: impl FnOnce(&mut Rows) -> R) -> R {
        f(&mut self.rows.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, sqlx::Error> {
        Ok(self.with_rows(|rows| rows.products.values().cloned().collect()))
    }

    async fn find_by_description(
        &self,
        keyword: String,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        Ok(self.with_rows(|rows| {
            rows.products
                .values()
                .filter(|product| product.description.contains(&keyword))
                .cloned()
                .collect()
        }))
    }

    async fn find_by_id(&self, product: ProductId) -> Result<Option<ProductRecord>, sqlx::Error> {
        Ok(self.with_rows(|rows| rows.products.get(&product.into_i64()).cloned()))
    }

    async fn exists_by_id(&self, product: ProductId) -> Result<bool, sqlx::Error> {
        Ok(self.with_rows(|rows| rows.products.contains_key(&product.into_i64())))
    }

    async fn save(
        &self,
        product: Option<ProductId>,
        data: ProductData,
    ) -> Result<ProductRecord, sqlx::Error> {
        self.with_rows(|rows| {
            let id = match product {
                Some(id) if rows.products.contains_key(&id.into_i64()) => id,
                Some(_) => return Err(sqlx::Error::RowNotFound),
                None => {
                    rows.last_id += 1;
                    ProductId::from_i64(rows.last_id)
                }
            };

            let record = ProductRecord {
                id,
                nom: data.nom,
                description: data.description,
                prix: data.prix,
            };

            rows.products.insert(id.into_i64(), record.clone());

            Ok(record)
        })
    }

    async fn delete_by_id(&self, product: ProductId) -> Result<u64, sqlx::Error> {
        Ok(self.with_rows(|rows| u64::from(rows.products.remove(&product.into_i64()).is_some())))
    }
}
