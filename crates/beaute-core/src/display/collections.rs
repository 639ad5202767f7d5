//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Product, ScheduledVisit};

/// Newtype wrapper for displaying product recommendations.
///
/// Each product is formatted with its own Display implementation; an empty
/// collection prints a single notice line.
///
/// # Examples
///
/// ```rust
/// use beaute_core::{catalog::recommended_products, display::Products};
///
/// let products = Products(recommended_products());
/// let output = format!("{}", products);
/// assert!(output.contains("UV protect"));
/// ```
pub struct Products(pub Vec<Product>);

impl fmt::Display for Products {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recommendations.")
        } else {
            for product in &self.0 {
                write!(f, "{product}")?;
            }
            Ok(())
        }
    }
}

/// Scheduled visits, one line each.
pub struct Timeline(pub Vec<ScheduledVisit>);

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No visits scheduled.");
        }
        for visit in &self.0 {
            write!(f, "{visit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{recommended_products, scheduled_visits};

    #[test]
    fn test_products_display_empty() {
        assert_eq!(Products(vec![]).to_string(), "No recommendations.\n");
    }

    #[test]
    fn test_products_display_keeps_catalog_order() {
        let output = Products(recommended_products()).to_string();
        let mask = output.find("Intensive hair mask").unwrap();
        let serum = output.find("Moisturizing serum").unwrap();
        let uv = output.find("UV protect").unwrap();
        assert!(mask < serum && serum < uv);
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_timeline_display() {
        assert_eq!(Timeline(vec![]).to_string(), "No visits scheduled.\n");

        let output = Timeline(scheduled_visits()).to_string();
        assert_eq!(output.lines().count(), 2);
        assert!(output.starts_with("- **2025-09-02** (90 min): Cut & color"));
    }
}
