use super::Session;
use crate::locate;
use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use sup_core::render::{render, TemplateSource};
use sup_core::standup::{attach, select_project, Attachments};

pub fn run(
    session: &Session,
    project: &str,
    name_header: bool,
    tail: Option<&str>,
    template: Option<&Path>,
) -> anyhow::Result<()> {
    let identity = if name_header {
        Some(session.config.require_identity(&session.config_path)?)
    } else {
        None
    };

    let mut record = select_project(session.records()?, project)?;
    attach(&mut record, &Attachments { identity, tail });

    if session.json {
        return print_json(&record);
    }

    let template = locate::resolve_template(template, &session.config);
    let source = TemplateSource::from_path(template.as_deref());
    let markdown = render(&source, &record)
        .with_context(|| format!("failed to render standup for {project}"))?;
    println!("{markdown}");
    Ok(())
}
