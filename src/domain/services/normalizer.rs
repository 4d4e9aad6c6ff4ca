//! Content normalizer
//!
//! Raw graphics pass through untouched unless optimization is enabled. When
//! it is, the markup is streamed through `quick-xml` and each configured
//! plugin drops the nodes or attributes it is responsible for.

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

use crate::domain::value_objects::{OptimizationPolicy, OptimizePlugin};

/// Errors turning raw markup into output content
///
/// Always recoverable at asset granularity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No single well-formed top-level graphic element was found
    #[error("malformed content: {reason}")]
    MalformedContent { reason: String },

    /// The optimizer could not parse the markup
    #[error("optimization failed: {message}")]
    Optimize { message: String },
}

/// Namespace prefixes written by vector editors
const EDITOR_PREFIXES: [&[u8]; 3] = [b"inkscape:", b"sodipodi:", b"sketch:"];

/// Namespace declarations for those editors
const EDITOR_XMLNS: [&[u8]; 3] = [b"xmlns:inkscape", b"xmlns:sodipodi", b"xmlns:sketch"];

/// Normalize raw graphic markup for the raw graphic output kind
pub fn normalize(raw: &str, policy: &OptimizationPolicy) -> Result<String, ContentError> {
    if !policy.enabled {
        return Ok(raw.to_string());
    }
    optimize(raw, policy.effective_plugins())
}

/// Run the given cleanup passes over the markup
pub fn optimize(raw: &str, plugins: &[OptimizePlugin]) -> Result<String, ContentError> {
    let enabled = |plugin: OptimizePlugin| plugins.contains(&plugin);

    let mut reader = Reader::from_str(raw);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(raw.len())));
    // Depth inside a removed subtree; zero when emitting
    let mut skip_depth = 0usize;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(ContentError::Optimize {
                    message: format!("XML parse error at position {}: {}", reader.error_position(), e),
                })
            }
        };

        if skip_depth > 0 {
            match event {
                Event::Start(_) => skip_depth += 1,
                Event::End(_) => skip_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        let event = match event {
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) if enabled(OptimizePlugin::RemoveXmlProcInst) => continue,
            Event::DocType(_) if enabled(OptimizePlugin::RemoveDoctype) => continue,
            Event::Comment(_) if enabled(OptimizePlugin::RemoveComments) => continue,
            Event::Text(ref text)
                if enabled(OptimizePlugin::CleanupWhitespace)
                    && text.iter().all(u8::is_ascii_whitespace) =>
            {
                continue
            }
            Event::Start(elem) => {
                if is_removed_element(elem.name().as_ref(), plugins) {
                    skip_depth = 1;
                    continue;
                }
                Event::Start(clean_attributes(&elem, plugins)?)
            }
            Event::Empty(elem) => {
                if is_removed_element(elem.name().as_ref(), plugins) {
                    continue;
                }
                Event::Empty(clean_attributes(&elem, plugins)?)
            }
            other => other,
        };

        writer
            .write_event(event)
            .map_err(|e| ContentError::Optimize {
                message: e.to_string(),
            })?;
    }

    String::from_utf8(writer.into_inner().into_inner()).map_err(|e| ContentError::Optimize {
        message: e.to_string(),
    })
}

fn is_removed_element(name: &[u8], plugins: &[OptimizePlugin]) -> bool {
    plugins.iter().any(|plugin| match plugin {
        OptimizePlugin::RemoveMetadata => name == b"metadata",
        OptimizePlugin::RemoveTitle => name == b"title",
        OptimizePlugin::RemoveDesc => name == b"desc",
        OptimizePlugin::RemoveEditorsNsData => has_editor_prefix(name),
        _ => false,
    })
}

fn has_editor_prefix(name: &[u8]) -> bool {
    EDITOR_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

fn clean_attributes(
    elem: &BytesStart<'_>,
    plugins: &[OptimizePlugin],
) -> Result<BytesStart<'static>, ContentError> {
    let drop_editor = plugins.contains(&OptimizePlugin::RemoveEditorsNsData);
    let drop_empty = plugins.contains(&OptimizePlugin::RemoveEmptyAttrs);

    let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let mut cleaned = BytesStart::new(name);

    for attr in elem.attributes() {
        let attr = attr.map_err(|e| ContentError::Optimize {
            message: e.to_string(),
        })?;
        let key = attr.key.as_ref();

        if drop_editor && (has_editor_prefix(key) || EDITOR_XMLNS.contains(&key)) {
            continue;
        }
        if drop_empty && attr.value.is_empty() {
            continue;
        }
        cleaned.push_attribute(attr);
    }

    Ok(cleaned)
}
