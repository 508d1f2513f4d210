use crate::error::{Result, SupError};
use crate::types::StandupRecord;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

/// Template shipped with the binary, used when no template is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/standup.md.tera");

/// Where the standup template comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl TemplateSource {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => TemplateSource::File(p.to_path_buf()),
            None => TemplateSource::Builtin,
        }
    }

    /// The template text.
    pub fn load(&self) -> Result<String> {
        match self {
            TemplateSource::Builtin => Ok(DEFAULT_TEMPLATE.to_string()),
            TemplateSource::File(path) => {
                if !path.exists() {
                    return Err(SupError::TemplateNotFound(path.display().to_string()));
                }
                Ok(std::fs::read_to_string(path)?)
            }
        }
    }
}

/// Render `record` through `template`.
///
/// Every field of the record is a top-level template variable, so free-form
/// keys from the standup file are addressed by name. `name_header` and
/// `name_tail` are always present and `null` when not attached. Trailing
/// whitespace is trimmed.
pub fn render_str(template: &str, record: &StandupRecord) -> Result<String> {
    let context = Context::from_serialize(record)?;
    let rendered = Tera::one_off(template, &context, false)?;
    Ok(rendered.trim_end().to_string())
}

pub fn render(source: &TemplateSource, record: &StandupRecord) -> Result<String> {
    let template = source.load()?;
    tracing::debug!(?source, project = %record.project, "rendering standup");
    render_str(&template, record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
