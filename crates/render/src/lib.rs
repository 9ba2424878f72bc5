//! Presentation for change reports: a plain-text summary for terminals and
//! HTML pages rendered from embedded [upon] templates. Pure formatting;
//! all classification decisions happen upstream in `snapdiff-diff`.

mod assets;
pub mod error;
mod render;

use crate::assets::Templates;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use upon::{Engine, Template};

/// Renders change reports through the embedded templates.
///
/// Templates are compiled eagerly at construction so that syntax errors
/// surface at startup rather than on the first request. The compiled
/// templates are reusable across renders.
pub struct Renderer {
    engine: Engine<'static>,
    report: Template<'static>,
    results: Template<'static>,
    index: Template<'static>,
}
impl Renderer {
    pub fn new() -> Result<Self> {
        let mut engine = Engine::new();
        filters::configure(&mut engine);
        let report = compile(&engine, "report.html")?;
        let results = compile(&engine, "results.html")?;
        let index = compile(&engine, "index.html")?;
        Ok(Self { engine, report, results, index })
    }
}

fn compile(engine: &Engine<'static>, name: &str) -> Result<Template<'static>> {
    let source = Templates::load(name)?;
    engine.compile(source).or_raise(|| ErrorKind::Template)
}

/// Custom [`upon`] extensions for HTML output.
mod filters {
    use std::fmt::Write;
    use upon::{Engine, Value, fmt as upon_fmt};

    /// Formatter that HTML-escapes string values. The engine's default
    /// formatter is format-agnostic, so anything interpolated into markup
    /// goes through this.
    fn escape_formatter(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
        match value {
            Value::String(s) => {
                for ch in s.chars() {
                    match ch {
                        '&' => f.write_str("&amp;")?,
                        '<' => f.write_str("&lt;")?,
                        '>' => f.write_str("&gt;")?,
                        '"' => f.write_str("&quot;")?,
                        '\'' => f.write_str("&#39;")?,
                        _ => f.write_char(ch)?,
                    }
                }
            },
            v => upon_fmt::default(f, v)?,
        };
        Ok(())
    }

    pub(crate) fn configure(engine: &mut Engine<'_>) {
        engine.add_formatter("escape", escape_formatter);
    }
}
