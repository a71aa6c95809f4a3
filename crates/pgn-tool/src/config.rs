use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

#[derive(Clone, Debug)]
pub struct ToolConfig {
    pub output: OutputFormat,
    /// Pattern applied inside directory arguments.
    pub dir_glob: String,
}

impl ToolConfig {
    pub fn from_env() -> Self {
        Self {
            output: match env::var("PGN_CHECK_OUTPUT").as_deref() {
                Ok("json") => OutputFormat::Json,
                _ => OutputFormat::Summary,
            },
            dir_glob: env::var("PGN_CHECK_GLOB").unwrap_or_else(|_| "*.pgn".to_string()),
        }
    }
}
