//! Service categories a plan can cover.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the five fixed service types.
///
/// The declaration order is part of the observable contract: it drives the
/// derived `Ord`, the iteration order of [`CategoryId::ALL`] and therefore the
/// order in which labels appear in a built prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Hair,
    Nail,
    Relax,
    Esthe,
    Clinic,
}

impl CategoryId {
    /// Every category, in enumeration order.
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Hair,
        CategoryId::Nail,
        CategoryId::Relax,
        CategoryId::Esthe,
        CategoryId::Clinic,
    ];

    /// Identifier used in the persisted record and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Hair => "hair",
            CategoryId::Nail => "nail",
            CategoryId::Relax => "relax",
            CategoryId::Esthe => "esthe",
            CategoryId::Clinic => "clinic",
        }
    }

    /// Human readable label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use beaute_core::models::CategoryId;
    ///
    /// assert_eq!(CategoryId::Esthe.label(), "Beauty/esthetic salon");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::Hair => "Hair salon",
            CategoryId::Nail => "Nail/eyelash salon",
            CategoryId::Relax => "Relaxation salon",
            CategoryId::Esthe => "Beauty/esthetic salon",
            CategoryId::Clinic => "Cosmetic clinic",
        }
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hair" => Ok(CategoryId::Hair),
            "nail" => Ok(CategoryId::Nail),
            "relax" => Ok(CategoryId::Relax),
            "esthe" => Ok(CategoryId::Esthe),
            "clinic" => Ok(CategoryId::Clinic),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}
