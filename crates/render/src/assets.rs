//! Embedded report templates.
//!
//! Templates are embedded into the binary at compile time using
//! [`rust-embed`](rust_embed), so the renderer has no runtime file
//! dependencies.

use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use rust_embed::Embed;
use std::borrow::Cow;

#[derive(Embed)]
#[folder = "templates/"]
pub(crate) struct Templates;
impl Templates {
    /// Get the source of an embedded template by name.
    pub(crate) fn load(name: impl AsRef<str>) -> Result<String> {
        let name = name.as_ref();
        let file = Self::get(name).ok_or_raise(|| ErrorKind::AssetNotFound(name.to_string()))?;
        String::from_utf8(file.data.into_owned()).or_raise(|| ErrorKind::AssetNotFound(name.to_string()))
    }

    /// List all embedded template names.
    pub(crate) fn list() -> Vec<Cow<'static, str>> {
        Self::iter().filter(|f| f.ends_with(".html")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_are_embedded() {
        for name in ["report.html", "results.html", "index.html"] {
            assert!(Templates::list().iter().any(|t| t == name), "missing {name}");
            assert!(!Templates::load(name).unwrap().is_empty());
        }
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(Templates::load("nope.html").is_err());
    }
}
