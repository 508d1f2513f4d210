use super::Session;
use crate::output::print_json;
use clap::Subcommand;
use sup_core::config::WarnLevel;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective config and the files it resolves to
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(session: &Session, subcmd: ConfigSubcommand) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(session),
        ConfigSubcommand::Validate => validate(session),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(session: &Session) -> anyhow::Result<()> {
    let standup_file = session.standup_file()?;

    if session.json {
        let value = serde_json::json!({
            "config_file": session.config_path,
            "standup_file": standup_file,
            "config": session.config,
        });
        return print_json(&value);
    }

    println!("Config file:   {}", session.config_path.display());
    println!("Standup file:  {}", standup_file.display());
    match session.config.template() {
        Some(t) => println!("Template:      {}", t.display()),
        None => println!("Template:      (built-in)"),
    }
    match &session.config.identity {
        Some(id) => println!("Identity:      {} ({})", id.name, id.username),
        None => println!("Identity:      (none)"),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(session: &Session) -> anyhow::Result<()> {
    let warnings = session.config.validate();

    if session.json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
