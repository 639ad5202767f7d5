//! Home-care product recommendations.

use serde::{Deserialize, Serialize};

/// A product shown next to the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    /// Price in JPY
    pub price: u32,

    /// Why the product is recommended
    pub reason: String,

    /// Purchase page
    pub href: String,

    /// Tailored from salon-provided records rather than a general pick
    pub personalized: bool,

    /// Where the personalization comes from; present for personalized entries
    pub basis: Option<String>,
}
