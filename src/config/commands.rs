use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_CLAIM_COMMAND: &[&str] = &["cargo", "run", "--release"];
pub const DEFAULT_MINE_COMMAND: &[&str] = &["ore"];

/// Command prefixes placed before the mode flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandsSection {
    pub claim: Vec<String>,
    pub mine: Vec<String>,
}

impl Default for CommandsSection {
    fn default() -> Self {
        Self {
            claim: to_owned(DEFAULT_CLAIM_COMMAND),
            mine: to_owned(DEFAULT_MINE_COMMAND),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCommandsSection {
    pub claim: Option<Vec<String>>,
    pub mine: Option<Vec<String>>,
}

pub fn parse_commands_section(
    raw: Option<RawCommandsSection>,
    path: &Path,
) -> Result<CommandsSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let claim = raw
        .claim
        .unwrap_or_else(|| to_owned(DEFAULT_CLAIM_COMMAND));
    validate_command(&claim, "commands.claim", path)?;
    let mine = raw.mine.unwrap_or_else(|| to_owned(DEFAULT_MINE_COMMAND));
    validate_command(&mine, "commands.mine", path)?;
    Ok(CommandsSection { claim, mine })
}

fn validate_command(
    command: &[String],
    field: &'static str,
    path: &Path,
) -> Result<(), ConfigError> {
    match command.first() {
        Some(program) if !program.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "The first element must name an executable".into(),
        }),
    }
}

fn to_owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}
