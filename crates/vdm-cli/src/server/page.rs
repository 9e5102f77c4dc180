//! The single HTML page, rendered with [upon].

use serde::Serialize;
use std::fmt::Write;
use upon::{fmt as upon_fmt, Engine, Template, Value};
use vdm_core::library::LibraryEntry;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
struct IndexContext<'a> {
    videos: &'a [LibraryEntry],
    has_videos: bool,
}

/// Default formatter: strings are HTML-escaped, everything else is written as usual.
fn escape_html(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
    match value {
        Value::String(s) => {
            for c in s.chars() {
                match c {
                    '&' => f.write_str("&amp;")?,
                    '<' => f.write_str("&lt;")?,
                    '>' => f.write_str("&gt;")?,
                    '"' => f.write_str("&quot;")?,
                    '\'' => f.write_str("&#x27;")?,
                    c => f.write_char(c)?,
                }
            }
        }
        v => upon_fmt::default(f, v)?,
    };
    Ok(())
}

/// Compiled index page. Values are HTML-escaped on output.
pub struct IndexPage {
    engine: Engine<'static>,
    template: Template<'static>,
}

impl IndexPage {
    /// Compiles the embedded template so syntax errors surface at startup.
    pub fn new() -> Result<Self, upon::Error> {
        let mut engine = Engine::new();
        engine.set_default_formatter(&escape_html);
        let template = engine.compile(INDEX_TEMPLATE)?;
        Ok(Self { engine, template })
    }

    pub fn render(&self, videos: &[LibraryEntry]) -> Result<String, upon::Error> {
        let ctx = IndexContext {
            videos,
            has_videos: !videos.is_empty(),
        };
        self.template.render(&self.engine, &ctx).to_string()
    }
}
