//! FAQ service
//!
//! Category/section listings, substring search over questions, and cursor
//! construction for per-session browsing.

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::faq::FaqCursor;
use crate::models::{FaqItem, FaqMatch};
use crate::storage::FaqRepository;

/// Business logic for FAQ browsing
pub struct FaqService<'a> {
    repo: &'a FaqRepository,
}

impl<'a> FaqService<'a> {
    pub fn new(repo: &'a FaqRepository) -> Self {
        Self { repo }
    }

    /// All category names
    pub fn categories(&self) -> OtchetnikResult<Vec<String>> {
        Ok(self
            .repo
            .data()?
            .category_names()
            .into_iter()
            .map(String::from)
            .collect())
    }

    /// Section names of a category
    pub fn sections(&self, category: &str) -> OtchetnikResult<Vec<String>> {
        let data = self.repo.data()?;
        let cat = data
            .category(category)
            .ok_or_else(|| OtchetnikError::category_not_found(category))?;
        Ok(cat.sections.keys().cloned().collect())
    }

    /// Items attached directly to a category
    pub fn items(&self, category: &str) -> OtchetnikResult<Vec<FaqItem>> {
        let data = self.repo.data()?;
        let cat = data
            .category(category)
            .ok_or_else(|| OtchetnikError::category_not_found(category))?;
        Ok(cat.items.clone())
    }

    /// Items of a named section within a category
    pub fn section_items(&self, category: &str, section: &str) -> OtchetnikResult<Vec<FaqItem>> {
        let data = self.repo.data()?;
        let cat = data
            .category(category)
            .ok_or_else(|| OtchetnikError::category_not_found(category))?;
        let sec = cat.sections.get(section).ok_or(OtchetnikError::NotFound {
            entity_type: "FAQ section",
            identifier: section.to_string(),
        })?;
        Ok(sec.items.clone())
    }

    /// Find the first item whose question contains `term`
    /// (case-insensitive), optionally limited to a category and/or section
    pub fn find_by_question(
        &self,
        term: &str,
        category_filter: Option<&str>,
        section_filter: Option<&str>,
    ) -> OtchetnikResult<Option<FaqMatch>> {
        let data = self.repo.data()?;
        let term = term.to_lowercase();

        for (cat_name, cat) in &data.categories {
            if let Some(filter) = category_filter {
                if cat_name != filter {
                    continue;
                }
            }

            if section_filter.is_none() {
                for item in &cat.items {
                    if item.question.to_lowercase().contains(&term) {
                        return Ok(Some(FaqMatch {
                            category: cat_name.clone(),
                            section: None,
                            item: item.clone(),
                        }));
                    }
                }
            }

            for (sec_name, sec) in &cat.sections {
                if let Some(filter) = section_filter {
                    if sec_name != filter {
                        continue;
                    }
                }
                for item in &sec.items {
                    if item.question.to_lowercase().contains(&term) {
                        return Ok(Some(FaqMatch {
                            category: cat_name.clone(),
                            section: Some(sec_name.clone()),
                            item: item.clone(),
                        }));
                    }
                }
            }
        }

        Ok(None)
    }

    /// Create a browsing cursor over a category's items, or over a section's
    /// items when a section is given
    pub fn cursor(&self, category: &str, section: Option<&str>) -> OtchetnikResult<FaqCursor> {
        let items = match section {
            Some(section) => self.section_items(category, section)?,
            None => self.items(category)?,
        };
        Ok(FaqCursor::new(items))
    }
}
