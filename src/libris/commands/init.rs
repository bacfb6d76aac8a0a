use crate::commands::{CmdMessage, CmdResult};
use crate::config::LibrisConfig;
use crate::error::Result;
use std::path::Path;

pub fn run(root: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if root.join("config.json").exists() {
        result.add_message(CmdMessage::info(format!(
            "Catalog already initialized at {}",
            root.display()
        )));
        return Ok(result);
    }

    LibrisConfig::default().save(root)?;
    result.add_message(CmdMessage::success(format!(
        "Catalog initialized at {}",
        root.display()
    )));
    Ok(result)
}
