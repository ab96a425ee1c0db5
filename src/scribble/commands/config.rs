use crate::commands::{CmdMessage, CmdResult};
use crate::config::ScribbleConfig;
use crate::error::{Result, ScribbleError};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ScribbleConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => {
                return Err(ScribbleError::Config(format!("Unknown config key: {}", key)));
            }
        },
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value.trim())));
        }
    }

    result.config = Some(config);
    Ok(result)
}
