//! Conversion of raw console text into typed catalog arguments.
//!
//! Blank input is reported as a missing value (`Validation`); text that is not
//! a number is reported as `TypeMismatch`. Range checks such as "must be
//! positive" are left to the catalog so that they surface the same way no
//! matter who calls it.

use crate::domain::SearchCriteria;
use super::error::{CatalogError, CatalogResult};

pub fn parse_id(text: &str) -> CatalogResult<i64> {
    parse_integer(text, "Sweet ID")
}

pub fn parse_quantity(text: &str) -> CatalogResult<i64> {
    parse_integer(text, "Quantity")
}

pub fn parse_price(text: &str) -> CatalogResult<f64> {
    let text = required(text, "Price")?;
    parse_number(text).ok_or_else(|| CatalogError::type_mismatch("Price must be a number."))
}

/// Text that is required but may be anything, such as a name or category.
pub fn required<'a>(text: &'a str, field: &str) -> CatalogResult<&'a str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CatalogError::validation(format!("{field} is required.")));
    }
    Ok(text)
}

impl SearchCriteria {
    /// Builds criteria from console answers; blank answers mean "no filter".
    pub fn from_input(
        name: &str,
        category: &str,
        min_price: &str,
        max_price: &str,
    ) -> CatalogResult<Self> {
        Ok(Self {
            name: optional(name).map(str::to_string),
            category: optional(category).map(str::to_string),
            min_price: optional(min_price).map(parse_bound).transpose()?,
            max_price: optional(max_price).map(parse_bound).transpose()?,
        })
    }
}

fn parse_integer(text: &str, field: &str) -> CatalogResult<i64> {
    let text = required(text, field)?;
    text.parse::<i64>()
        .map_err(|_| CatalogError::type_mismatch(format!("{field} must be a whole number.")))
}

fn parse_bound(text: &str) -> CatalogResult<f64> {
    parse_number(text).ok_or_else(|| CatalogError::type_mismatch("Price range values must be numbers."))
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn optional(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_missing_not_mistyped() {
        assert!(matches!(parse_id("  "), Err(CatalogError::Validation(_))));
        assert!(matches!(parse_price(""), Err(CatalogError::Validation(_))));
        assert!(matches!(parse_quantity("\t"), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn non_numeric_is_type_mismatch() {
        assert!(matches!(parse_id("abc"), Err(CatalogError::TypeMismatch(_))));
        assert!(matches!(parse_quantity("1.5"), Err(CatalogError::TypeMismatch(_))));
        assert!(matches!(parse_price("ten"), Err(CatalogError::TypeMismatch(_))));
        assert!(matches!(parse_price("NaN"), Err(CatalogError::TypeMismatch(_))));
        assert!(matches!(parse_price("inf"), Err(CatalogError::TypeMismatch(_))));
    }

    #[test]
    fn negative_numbers_parse() {
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_price("-0.5"), Ok(-0.5));
    }

    #[test]
    fn criteria_from_blank_answers_is_empty() {
        let criteria = SearchCriteria::from_input("", " ", "", "").unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn criteria_keeps_supplied_answers() {
        let criteria = SearchCriteria::from_input("choc", "", "10", "49.5").unwrap();
        assert_eq!(
            criteria,
            SearchCriteria::new().name("choc").min_price(10.0).max_price(49.5)
        );
    }

    #[test]
    fn criteria_rejects_non_numeric_bound() {
        let err = SearchCriteria::from_input("", "", "x", "").unwrap_err();
        assert_eq!(err, CatalogError::type_mismatch("Price range values must be numbers."));
    }
}
