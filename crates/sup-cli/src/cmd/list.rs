use super::Session;
use crate::output::{print_json, print_table};

pub fn run(session: &Session) -> anyhow::Result<()> {
    let records = session.records()?;

    if session.json {
        #[derive(serde::Serialize)]
        struct ProjectSummary<'a> {
            project: &'a str,
            members: usize,
        }

        let summaries: Vec<ProjectSummary> = records
            .iter()
            .map(|r| ProjectSummary {
                project: &r.project,
                members: r.members.len(),
            })
            .collect();
        return print_json(&summaries);
    }

    if records.is_empty() {
        println!("No projects.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| vec![r.project.clone(), r.members.len().to_string()])
        .collect();
    print_table(&["PROJECT", "MEMBERS"], &rows);
    Ok(())
}
