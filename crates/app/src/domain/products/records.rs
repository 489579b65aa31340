//! Product Records

use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub nom: String,
    pub description: String,
    pub prix: Decimal,
}
