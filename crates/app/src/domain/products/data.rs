//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::records::ProductId;

/// Candidate product as received from a caller, before validation.
///
/// Every field may be missing; [`validate`](crate::domain::products::validator::validate)
/// decides whether the draft can be persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub prix: Option<Decimal>,
}

/// Validated Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub nom: String,
    pub description: String,
    pub prix: Decimal,
}

/// Product Update Command
///
/// Replaces the whole product identified by `id` with `product`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub product: ProductDraft,
}
