//! Include/exclude filtering of raw assets
//!
//! Rules match against an asset's original name. An asset survives when it
//! matches at least one include rule (or there are none) and no exclude rule.

use regex::Regex;

use crate::domain::entities::RawAsset;
use crate::error::{IconsyncError, IconsyncResult};

/// Whether a rule keeps or drops matching assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Include,
    Exclude,
}

#[derive(Debug, Clone)]
struct FilterRule {
    action: FilterAction,
    pattern: Regex,
}

/// Compiled include/exclude rule table
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    rules: Vec<FilterRule>,
}

impl AssetFilter {
    /// A filter that keeps everything
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Compile the configured patterns
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> IconsyncResult<Self> {
        let mut filter = Self::default();
        if let Some(pattern) = include {
            filter.push(FilterAction::Include, "include", pattern)?;
        }
        if let Some(pattern) = exclude {
            filter.push(FilterAction::Exclude, "exclude", pattern)?;
        }
        Ok(filter)
    }

    fn push(
        &mut self,
        action: FilterAction,
        field: &'static str,
        pattern: &str,
    ) -> IconsyncResult<()> {
        let compiled = Regex::new(pattern).map_err(|source| IconsyncError::InvalidPattern {
            field,
            pattern: pattern.to_string(),
            source,
        })?;
        self.rules.push(FilterRule {
            action,
            pattern: compiled,
        });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decide a single name
    pub fn allows(&self, name: &str) -> bool {
        let mut has_include = false;
        let mut included = false;

        for rule in &self.rules {
            match rule.action {
                FilterAction::Exclude if rule.pattern.is_match(name) => return false,
                FilterAction::Exclude => {}
                FilterAction::Include => {
                    has_include = true;
                    included |= rule.pattern.is_match(name);
                }
            }
        }

        !has_include || included
    }

    /// Keep the assets this filter allows, in input order
    pub fn apply(&self, assets: Vec<RawAsset>) -> Vec<RawAsset> {
        if self.is_empty() {
            return assets;
        }
        assets
            .into_iter()
            .filter(|asset| self.allows(asset.original_name()))
            .collect()
    }
}
