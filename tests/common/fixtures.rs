//! Test fixtures - reusable graphic markup and manifests.

#![allow(dead_code)]

/// A minimal well-formed graphic
pub const ARROW: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M5 12h14"/></svg>"#;

/// A second, different graphic
pub const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2l3 7h7l-6 4 2 7-6-4-6 4 2-7-6-4h7z"/></svg>"#;

/// Markup with no root graphic element; fails component conversion
pub const NOT_A_GRAPHIC: &str = "<div>not a graphic</div>";

/// Export carrying editor metadata the optimizer strips
pub const EDITOR_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Sketch -->
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
  <title>arrow</title>
  <path d="M0 0h24"/>
</svg>"#;

/// Render a manifest body from `(name, content)` pairs
pub fn manifest(assets: &[(&str, &str)]) -> String {
    let entries: Vec<serde_json::Value> = assets
        .iter()
        .map(|(name, content)| serde_json::json!({ "name": name, "content": content }))
        .collect();
    serde_json::json!({ "assets": entries }).to_string()
}

/// Config with kebab-case names and both output formats
pub const KEBAB_BOTH_FORMATS: &str = r#"
[output]
directory = "icons"
formats = ["svg", "react"]

[naming]
transform = "kebab-case"
"#;
