use super::Session;
use anyhow::Context;
use sup_core::{config::Config, io, paths, render::DEFAULT_TEMPLATE, types::Identity};

pub fn run(session: &Session, name: Option<String>, username: Option<String>) -> anyhow::Result<()> {
    let config_path = &session.config_path;
    let template_path = paths::template_beside(config_path);

    println!("Initializing sup config in: {}", config_path.display());

    // Template first, so the config can point at it.
    let written = io::write_if_missing(&template_path, DEFAULT_TEMPLATE.as_bytes())
        .with_context(|| format!("failed to write {}", template_path.display()))?;
    report(written, &template_path.display().to_string());

    if config_path.exists() {
        report(false, &config_path.display().to_string());
        return Ok(());
    }

    let identity = match (name, username) {
        (Some(name), Some(username)) => Some(Identity { name, username }),
        (Some(name), None) => Some(Identity {
            username: name.to_lowercase().replace(' ', ""),
            name,
        }),
        (None, Some(username)) => Some(Identity {
            name: username.clone(),
            username,
        }),
        (None, None) => None,
    };
    let config = Config {
        identity,
        template: Some(template_path.display().to_string()),
        ..Config::default()
    };
    config
        .save(config_path)
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    report(true, &config_path.display().to_string());

    if config.identity.is_none() {
        println!("\nAdd an 'identity' section (name, username) to use --name-header.");
    }
    Ok(())
}

fn report(created: bool, what: &str) {
    if created {
        println!("  created: {what}");
    } else {
        println!("  exists:  {what}");
    }
}
