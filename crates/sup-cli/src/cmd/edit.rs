use super::Session;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

pub fn run(session: &Session, editor: Option<&str>) -> anyhow::Result<()> {
    let path = session.standup_file()?;
    let editor = editor.or(session.config.editor.as_deref());

    match editor {
        Some(editor) => launch(editor, &path),
        None => open::that(&path).with_context(|| format!("failed to open {}", path.display())),
    }
}

/// Run `editor` (a program plus optional arguments) on `path` and wait.
fn launch(editor: &str, path: &Path) -> anyhow::Result<()> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| anyhow::anyhow!("editor command is empty"))?;
    let program =
        which::which(program).with_context(|| format!("editor '{program}' not found on PATH"))?;

    tracing::debug!(editor = %program.display(), file = %path.display(), "launching editor");
    let status = Command::new(&program)
        .args(words)
        .arg(path)
        .status()
        .with_context(|| format!("failed to run editor '{editor}'"))?;

    if !status.success() {
        anyhow::bail!("editor '{editor}' exited with {status}");
    }
    Ok(())
}
