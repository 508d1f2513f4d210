use super::Session;
use crate::output::{print_json, print_table};
use sup_core::standup::{candidates, select_project};

/// Show the resolution candidates for a project, placeholder first.
pub fn run(session: &Session, project: &str) -> anyhow::Result<()> {
    let record = select_project(session.records()?, project)?;
    let candidates = candidates(&record.members);

    if session.json {
        return print_json(&candidates);
    }

    let rows: Vec<Vec<String>> = candidates
        .iter()
        .map(|m| {
            vec![
                m.name.clone(),
                m.username.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    print_table(&["NAME", "USERNAME"], &rows);
    Ok(())
}
