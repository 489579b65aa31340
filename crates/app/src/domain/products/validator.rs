//! Product validation rules.
//!
//! Rules are checked in a fixed order and the first broken rule wins:
//! name, then description length, then price.

use rust_decimal::Decimal;

use crate::domain::products::{
    data::{ProductData, ProductDraft},
    errors::ProductValidationError,
};

/// Minimum number of characters in a product description.
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Check a candidate product against the business rules.
///
/// # Errors
///
/// Returns the first [`ProductValidationError`] the draft breaks.
pub fn validate(product: &ProductDraft) -> Result<(), ProductValidationError> {
    checked_fields(product).map(|_| ())
}

impl TryFrom<ProductDraft> for ProductData {
    type Error = ProductValidationError;

    fn try_from(product: ProductDraft) -> Result<Self, Self::Error> {
        let (nom, description, prix) = checked_fields(&product)?;

        Ok(Self {
            nom: nom.to_owned(),
            description: description.to_owned(),
            prix,
        })
    }
}

fn checked_fields(product: &ProductDraft) -> Result<(&str, &str, Decimal), ProductValidationError> {
    let nom = product
        .nom
        .as_deref()
        .filter(|nom| !nom.is_empty())
        .ok_or(ProductValidationError::NameRequired)?;

    // A missing description is reported as too short.
    let description = product
        .description
        .as_deref()
        .filter(|description| description.chars().count() >= DESCRIPTION_MIN_CHARS)
        .ok_or(ProductValidationError::DescriptionTooShort)?;

    let prix = product
        .prix
        .filter(|prix| *prix >= Decimal::ZERO)
        .ok_or(ProductValidationError::NegativePrice)?;

    Ok((nom, description, prix))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn draft(nom: Option<&str>, description: Option<&str>, prix: Option<Decimal>) -> ProductDraft {
        ProductDraft {
            nom: nom.map(str::to_owned),
            description: description.map(str::to_owned),
            prix,
        }
    }

    fn valid_draft() -> ProductDraft {
        draft(
            Some("Stylo"),
            Some("Un stylo bleu à encre gel"),
            Some(Decimal::new(15, 1)),
        )
    }

    #[test]
    fn valid_product_passes() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn zero_price_is_valid() {
        let product = ProductDraft {
            prix: Some(Decimal::ZERO),
            ..valid_draft()
        };

        assert_eq!(validate(&product), Ok(()));
    }

    #[test]
    fn missing_name_is_rejected_regardless_of_other_fields() {
        let product = draft(None, None, Some(Decimal::NEGATIVE_ONE));

        assert_eq!(validate(&product), Err(ProductValidationError::NameRequired));
    }

    #[test]
    fn empty_name_is_rejected() {
        let product = ProductDraft {
            nom: Some(String::new()),
            ..valid_draft()
        };

        assert_eq!(validate(&product), Err(ProductValidationError::NameRequired));
    }

    #[test]
    fn blank_name_only_needs_to_be_non_empty() {
        let product = ProductDraft {
            nom: Some("   ".to_owned()),
            ..valid_draft()
        };

        assert_eq!(validate(&product), Ok(()));
    }

    #[test]
    fn short_description_is_rejected() {
        let product = ProductDraft {
            description: Some("Trop court".to_owned()),
            prix: Some(Decimal::NEGATIVE_ONE),
            ..valid_draft()
        };

        assert_eq!(
            validate(&product),
            Err(ProductValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn missing_description_is_reported_as_too_short() {
        let product = ProductDraft {
            description: None,
            ..valid_draft()
        };

        assert_eq!(
            validate(&product),
            Err(ProductValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn description_length_counts_characters_not_bytes() {
        // 19 characters but more than 20 bytes.
        let nineteen = "éééééééééééééééééé.";
        let twenty = "éééééééééééééééééé..";

        let short = ProductDraft {
            description: Some(nineteen.to_owned()),
            ..valid_draft()
        };
        let exact = ProductDraft {
            description: Some(twenty.to_owned()),
            ..valid_draft()
        };

        assert_eq!(
            validate(&short),
            Err(ProductValidationError::DescriptionTooShort)
        );
        assert_eq!(validate(&exact), Ok(()));
    }

    #[test]
    fn astral_characters_count_once() {
        let product = ProductDraft {
            description: Some("\u{1F58A}".repeat(10)),
            ..valid_draft()
        };

        assert_eq!(
            validate(&product),
            Err(ProductValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let product = ProductDraft {
            prix: Some(Decimal::new(-1, 2)),
            ..valid_draft()
        };

        assert_eq!(validate(&product), Err(ProductValidationError::NegativePrice));
    }

    #[test]
    fn missing_price_is_rejected() {
        let product = ProductDraft {
            prix: None,
            ..valid_draft()
        };

        assert_eq!(validate(&product), Err(ProductValidationError::NegativePrice));
    }

    #[test]
    fn validated_data_keeps_the_draft_fields() -> TestResult {
        let data = ProductData::try_from(valid_draft())?;

        assert_eq!(data.nom, "Stylo");
        assert_eq!(data.description, "Un stylo bleu à encre gel");
        assert_eq!(data.prix, Decimal::new(15, 1));

        Ok(())
    }
}
