//! The persisted, image-free part of a plan request.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Goal text a fresh draft starts with.
pub const DEFAULT_GOAL_TEXT: &str = "Best condition for my wedding in six months";

/// Monthly budget (JPY) a fresh draft starts with.
pub const DEFAULT_MONTHLY_BUDGET: u64 = 50_000;

/// A set of selected categories.
///
/// Iteration always follows enumeration order, whatever order the
/// categories were selected in. On the wire the set is a map from every
/// category id to a boolean; keys missing from a stored map are unselected
/// and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<CategoryId, bool>")]
pub struct CategorySet(BTreeSet<CategoryId>);

impl CategorySet {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects a category.
    pub fn set(&mut self, category: CategoryId, selected: bool) {
        if selected {
            self.0.insert(category);
        } else {
            self.0.remove(&category);
        }
    }

    pub fn contains(&self, category: CategoryId) -> bool {
        self.0.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selected categories in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.0.iter().copied()
    }

    /// Display labels of the selected categories joined by `", "`.
    ///
    /// An empty selection yields an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use beaute_core::models::{CategoryId, CategorySet};
    ///
    /// let set: CategorySet = [CategoryId::Clinic, CategoryId::Hair].into_iter().collect();
    /// assert_eq!(set.joined_labels(), "Hair salon, Cosmetic clinic");
    /// ```
    pub fn joined_labels(&self) -> String {
        self.iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<CategoryId> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CategoryId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, bool>> for CategorySet {
    fn from(map: BTreeMap<String, bool>) -> Self {
        map.into_iter()
            .filter(|(_, selected)| *selected)
            .filter_map(|(key, _)| key.parse::<CategoryId>().ok())
            .collect()
    }
}

impl From<CategorySet> for BTreeMap<CategoryId, bool> {
    fn from(set: CategorySet) -> Self {
        CategoryId::ALL
            .into_iter()
            .map(|c| (c, set.contains(c)))
            .collect()
    }
}

/// The reloadable subset of a plan request.
///
/// Never carries image data. Fields missing from a stored record take their
/// default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDraft {
    /// What the user wants to achieve, free text
    pub goal_text: String,

    /// Monthly budget in JPY
    pub monthly_budget: u64,

    /// Service categories the plan should use
    pub selected_categories: CategorySet,

    /// Whether the (mocked) face/hair/skin auto-crop is switched on
    pub auto_crop_enabled: bool,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            goal_text: DEFAULT_GOAL_TEXT.to_string(),
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            selected_categories: [CategoryId::Hair, CategoryId::Esthe].into_iter().collect(),
            auto_crop_enabled: true,
        }
    }
}
