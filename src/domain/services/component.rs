//! Code component converter
//!
//! Wraps raw graphic markup in a function component. Attribute names are
//! rewritten through a small rule table so the markup is valid JSX.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::name_transformer::to_pascal_case;
use super::normalizer::ContentError;
use crate::domain::value_objects::{ComponentPolicy, ExportStyle};

/// Attributes whose JSX name is not the plain camelCase form
const ATTRIBUTE_RENAMES: [(&str, &str); 7] = [
    ("class", "className"),
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
    ("xlink:href", "xlinkHref"),
    ("xml:space", "xmlSpace"),
    ("xml:lang", "xmlLang"),
    ("xmlns:xlink", "xmlnsXlink"),
];

/// Attribute prefixes JSX accepts verbatim
const VERBATIM_PREFIXES: [&str; 2] = ["data-", "aria-"];

static ROOT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b([^>]*)>(.*)</svg>").expect("root element pattern"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z][^>]*>").expect("tag pattern"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(\s*=\s*)("[^"]*"|'[^']*')"#)
        .expect("attribute pattern")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));

/// Convert raw graphic markup into component source
///
/// `base_name` is the transformed asset name; the component identifier is
/// derived from it.
pub fn to_code_component(
    base_name: &str,
    raw: &str,
    policy: &ComponentPolicy,
) -> Result<String, ContentError> {
    let caps = ROOT_ELEMENT
        .captures(raw)
        .ok_or_else(|| ContentError::MalformedContent {
            reason: "no top-level <svg> element".to_string(),
        })?;

    let attrs = rewrite_attributes(&caps[1]);
    let attrs = attrs.trim_end().trim_end_matches('/').trim_end();
    let inner = COMMENT.replace_all(&caps[2], "");
    let inner = TAG.replace_all(&inner, |tag: &Captures| rewrite_attributes(&tag[0]));

    let identifier = component_identifier(policy.component_prefix.as_deref(), base_name);
    let export = match policy.export_type {
        ExportStyle::Named => "export",
        ExportStyle::Default => "export default",
    };
    let props = if policy.typescript {
        "props: React.SVGProps<SVGSVGElement>"
    } else {
        "props"
    };

    Ok(format!(
        "import React from 'react';\n\n\
         {export} function {identifier}({props}) {{\n  \
         return (\n    \
         <svg{attrs} {{...props}}>\n      \
         {inner}\n    \
         </svg>\n  \
         );\n\
         }}\n",
        inner = inner.trim(),
    ))
}

/// Identifier for a generated component
///
/// Characters that cannot appear in an identifier are dropped; an empty or
/// digit-leading result is prefixed with `Svg`.
pub fn component_identifier(prefix: Option<&str>, base_name: &str) -> String {
    let raw = format!("{}{}", prefix.unwrap_or_default(), to_pascal_case(base_name));
    let ident: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();

    match ident.chars().next() {
        Some(c) if !c.is_ascii_digit() => ident,
        _ => format!("Svg{ident}"),
    }
}

/// JSX name for a markup attribute
pub fn jsx_attribute_name(name: &str) -> String {
    if let Some((_, renamed)) = ATTRIBUTE_RENAMES.iter().find(|(from, _)| *from == name) {
        return (*renamed).to_string();
    }
    if VERBATIM_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' || c == ':' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn rewrite_attributes(markup: &str) -> String {
    ATTRIBUTE
        .replace_all(markup, |caps: &Captures| {
            format!("{}{}{}", jsx_attribute_name(&caps[1]), &caps[2], &caps[3])
        })
        .into_owned()
}
