use super::Session;
use anyhow::Context;
use std::path::Path;
use sup_core::irclog::{find_irc_logs, write_last_standup, Markers};
use sup_core::SupError;

/// Print the last standup from the single IRC log matching `pattern`, or
/// the candidate paths when several match.
pub fn run(session: &Session, pattern: &str, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let irc = &session.config.irc;
    let dir = log_dir
        .map(Path::to_path_buf)
        .or_else(|| irc.log_dir())
        .ok_or_else(|| anyhow::anyhow!("no IRC log directory: pass --log-dir or set irc.log_dir"))?;

    let logs = find_irc_logs(&dir, pattern)
        .with_context(|| format!("failed to read IRC log directory {}", dir.display()))?;

    match logs.as_slice() {
        [] => Err(SupError::NoIrcLogsFound(pattern.to_string()).into()),
        [log] => {
            let text = std::fs::read_to_string(log)
                .with_context(|| format!("failed to read {}", log.display()))?;
            let markers = Markers {
                begin: &irc.pattern_begin,
                discussion: &irc.pattern_discussion,
                end: &irc.pattern_end,
            };
            write_last_standup(&text, markers, std::io::stdout().lock())
                .with_context(|| format!("no standup in {}", log.display()))
        }
        many => {
            for log in many {
                println!("{}", log.display());
            }
            Ok(())
        }
    }
}
