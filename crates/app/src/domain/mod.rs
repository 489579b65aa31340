//! Produit Domain Concerns

pub mod products;
