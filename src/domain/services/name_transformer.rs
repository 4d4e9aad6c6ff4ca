//! Name transformer
//!
//! Maps a raw asset name and a naming policy to a filesystem-safe base name.
//! Pure and total: every input, including the empty string, has an output.

use crate::domain::value_objects::{NameTransform, NamingPolicy};

/// Characters that are unsafe in file names on at least one major platform
pub const UNSAFE_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Transform a raw name into a target base name
///
/// The case transform runs first; sanitizing runs last because the
/// transform can surface characters that still need replacing.
pub fn transform(raw_name: &str, policy: &NamingPolicy) -> String {
    let transformed = match policy.transform {
        NameTransform::Preserve => raw_name.to_string(),
        NameTransform::KebabCase => to_kebab_case(raw_name),
        NameTransform::CamelCase => to_camel_case(raw_name),
        NameTransform::PascalCase => to_pascal_case(raw_name),
    };

    if policy.sanitize {
        sanitize(&transformed)
    } else {
        transformed
    }
}

/// `arrowLeft icon_v2` -> `arrow-left-icon-v2`
///
/// Hyphen at every ASCII lowercase-to-uppercase boundary, whitespace and
/// underscore runs collapse to one hyphen, then everything is lowercased.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_separator = false;

    for c in name.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator {
                out.push('-');
                in_separator = true;
            }
            prev = Some(c);
            continue;
        }
        in_separator = false;

        if matches!(prev, Some(p) if p.is_ascii_lowercase()) && c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}

/// `arrow-left icon` -> `arrowLeftIcon`
pub fn to_camel_case(name: &str) -> String {
    join_words(name, false)
}

/// `arrow-left icon` -> `ArrowLeftIcon`
pub fn to_pascal_case(name: &str) -> String {
    join_words(name, true)
}

/// Replace unsafe characters with `-`, collapse whitespace runs, trim
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if UNSAFE_FILENAME_CHARS.contains(&c) {
            out.push('-');
        } else {
            out.push(c);
        }
    }

    out.trim().to_string()
}

fn is_word_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Drop separator runs, uppercasing the character that follows each run,
/// then force the case of the first character.
///
/// A separator run at the very end has no character to uppercase; it
/// collapses to its last separator.
fn join_words(name: &str, upper_first: bool) -> String {
    let mut joined = String::with_capacity(name.len());
    let mut pending_separator: Option<char> = None;

    for c in name.chars() {
        if is_word_separator(c) {
            pending_separator = Some(c);
            continue;
        }
        if pending_separator.take().is_some() {
            joined.extend(c.to_uppercase());
        } else {
            joined.push(c);
        }
    }
    if let Some(separator) = pending_separator {
        joined.push(separator);
    }

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = if upper_first {
                first.to_uppercase().collect()
            } else {
                first.to_lowercase().collect()
            };
            out.push_str(chars.as_str());
            out
        }
        None => joined,
    }
}
