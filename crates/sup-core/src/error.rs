use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("standup file not found: {0}")]
    StandupFileNotFound(String),

    #[error("standup document {index} is invalid: {reason}")]
    InvalidDocument { index: usize, reason: String },

    #[error("identity not configured: add an 'identity' section to {0}")]
    IdentityNotConfigured(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("IRC standup not found: {0}")]
    IrcStandupNotFound(String),

    #[error("IRC standup position invalid: begin {begin}, discussion {discussion}, end {end}")]
    IrcStandupPositionInvalid {
        begin: usize,
        discussion: usize,
        end: usize,
    },

    #[error("no IRC logs found matching '{0}'")]
    NoIrcLogsFound(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, SupError>;
