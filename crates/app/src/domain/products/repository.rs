//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::{
    data::ProductData,
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const REPLACE_PRODUCT_SQL: &str = include_str!("sql/replace_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Storage access for products. Every call runs as its own statement.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products, ordered by id.
    async fn find_all(&self) -> Result<Vec<ProductRecord>, sqlx::Error>;

    /// Products whose description contains `keyword`, ordered by id.
    async fn find_by_description(&self, keyword: String)
    -> Result<Vec<ProductRecord>, sqlx::Error>;

    async fn find_by_id(&self, product: ProductId) -> Result<Option<ProductRecord>, sqlx::Error>;

    async fn exists_by_id(&self, product: ProductId) -> Result<bool, sqlx::Error>;

    /// Insert `data` under a new id when `product` is `None`, otherwise replace
    /// the existing row. Replacing a missing row fails with
    /// [`sqlx::Error::RowNotFound`].
    async fn save(
        &self,
        product: Option<ProductId>,
        data: ProductData,
    ) -> Result<ProductRecord, sqlx::Error>;

    /// Returns the number of deleted rows.
    async fn delete_by_id(&self, product: ProductId) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_description(
        &self,
        keyword: String,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SEARCH_PRODUCTS_SQL)
            .bind(contains_pattern(&keyword))
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, product: ProductId) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(&self.pool)
            .await
    }

    async fn exists_by_id(&self, product: ProductId) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PRODUCT_EXISTS_SQL)
            .bind(product.into_i64())
            .fetch_one(&self.pool)
            .await
    }

    async fn save(
        &self,
        product: Option<ProductId>,
        data: ProductData,
    ) -> Result<ProductRecord, sqlx::Error> {
        let Some(product) = product else {
            return query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
                .bind(data.nom)
                .bind(data.description)
                .bind(data.prix)
                .fetch_one(&self.pool)
                .await;
        };

        query_as::<Postgres, ProductRecord>(REPLACE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(data.nom)
            .bind(data.description)
            .bind(data.prix)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, product: ProductId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            nom: row.try_get("nom")?,
            description: row.try_get("description")?,
            prix: row.try_get("prix")?,
        })
    }
}

/// `LIKE` pattern matching any text containing `keyword` literally.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);

    pattern.push('%');

    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
