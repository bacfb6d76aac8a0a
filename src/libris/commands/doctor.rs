use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.doctor()?;
    let mut result = CmdResult::default();

    if report.recreated_descriptions == 0 && report.orphaned_descriptions == 0 {
        result.add_message(CmdMessage::info("Catalog is consistent."));
    } else {
        if report.recreated_descriptions > 0 {
            result.add_message(CmdMessage::success(format!(
                "Recreated {} missing description file(s)",
                report.recreated_descriptions
            )));
        }
        if report.orphaned_descriptions > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Found {} orphaned description file(s)",
                report.orphaned_descriptions
            )));
        }
    }

    Ok(result.with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn clean_store_reports_consistent() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        assert!(result.messages[0].content.contains("consistent"));
        assert!(result.report.is_some());
    }
}
