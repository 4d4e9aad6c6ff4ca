//! Naming policy value object

use serde::{Deserialize, Serialize};

/// Case transformation applied to raw asset names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NameTransform {
    /// Keep the name as-is
    #[default]
    #[serde(rename = "preserve")]
    Preserve,
    /// `arrow-left`
    #[serde(rename = "kebab-case")]
    KebabCase,
    /// `arrowLeft`
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `ArrowLeft`
    #[serde(rename = "PascalCase")]
    PascalCase,
}

impl NameTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameTransform::Preserve => "preserve",
            NameTransform::KebabCase => "kebab-case",
            NameTransform::CamelCase => "camelCase",
            NameTransform::PascalCase => "PascalCase",
        }
    }
}

/// How raw asset names become target base names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    #[serde(default)]
    pub transform: NameTransform,

    /// Replace filesystem-unsafe characters after the case transform
    #[serde(default = "default_true")]
    pub sanitize: bool,
}

impl NamingPolicy {
    pub fn new(transform: NameTransform) -> Self {
        Self {
            transform,
            sanitize: true,
        }
    }

    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::new(NameTransform::Preserve)
    }
}

fn default_true() -> bool {
    true
}
