use crate::commands::{CmdMessage, CmdResult};
use crate::config::LibrisConfig;
use crate::error::Result;
use crate::model::BookState;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDateFormat(String),
    SetDefaultState(BookState),
}

pub fn run(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = LibrisConfig::load(root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetDateFormat(format) => {
            config.date_format = format;
            config.save(root)?;
            result.add_message(CmdMessage::success(format!(
                "date-format set to {}",
                config.date_format
            )));
        }
        ConfigAction::SetDefaultState(state) => {
            config.default_state = state;
            config.save(root)?;
            result.add_message(CmdMessage::success(format!(
                "default-state set to {}",
                config.default_state
            )));
        }
    }

    Ok(result.with_config(config))
}
