//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::{
    data::{ProductData, ProductDraft, ProductUpdate},
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
    repository::{PgProductsRepository, ProductsRepository},
};

/// Products service backed by `PostgreSQL`.
pub type PgProductsService = RepositoryProductsService<PgProductsRepository>;

/// Products service orchestrating validation and a [`ProductsRepository`].
#[derive(Debug)]
pub struct RepositoryProductsService<R> {
    repository: R,
}

impl<R: ProductsRepository> RepositoryProductsService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductsRepository> ProductsService for RepositoryProductsService<R> {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.find_all().await?)
    }

    async fn search_products(
        &self,
        keyword: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.find_by_description(keyword).await?)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_by_id(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: ProductDraft,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = ProductData::try_from(product)?;

        Ok(self.repository.save(None, product).await?)
    }

    async fn update_product(
        &self,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = ProductData::try_from(update.product)?;

        if !self.repository.exists_by_id(update.id).await? {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(self.repository.save(Some(update.id), product).await?)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        if self.repository.find_by_id(product).await?.is_none() {
            return Err(ProductsServiceError::NotFound);
        }

        let rows_affected = self.repository.delete_by_id(product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products whose description contains the keyword.
    async fn search_products(
        &self,
        keyword: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates and stores a new product; storage assigns its id.
    async fn create_product(
        &self,
        product: ProductDraft,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates the replacement and overwrites an existing product.
    async fn update_product(
        &self,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given id.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
