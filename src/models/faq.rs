//! FAQ data model
//!
//! The FAQ file is a JSON object keyed by category name. A category holds
//! items directly and/or named sections with their own items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// A named section inside a category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqSection {
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

/// A top-level FAQ category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategory {
    /// Items attached directly to the category
    #[serde(default)]
    pub items: Vec<FaqItem>,
    /// Named sections with their own items
    #[serde(default)]
    pub sections: BTreeMap<String, FaqSection>,
}

/// The whole FAQ structure keyed by category name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqData {
    pub categories: BTreeMap<String, FaqCategory>,
}

impl FaqData {
    /// All category names
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&FaqCategory> {
        self.categories.get(name)
    }
}

/// Location of a found FAQ item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqMatch {
    pub category: String,
    pub section: Option<String>,
    pub item: FaqItem,
}
