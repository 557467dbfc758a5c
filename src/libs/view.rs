use super::catalog::Tool;
use super::synclog::SyncLogEntry;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tools(tools: &[Tool]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "URL", "CATEGORY", "TIMES USED", "LAST USED"]);
        for tool in tools {
            table.add_row(row![
                tool.id,
                tool.name,
                tool.url,
                tool.category,
                tool.times_used,
                tool.last_used_at.map(|at| at.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn sync_log(entries: &[&SyncLogEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "TOOL", "SECONDS", "OUTCOME", "ERROR"]);
        for entry in entries {
            table.add_row(row![
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.tool_name.as_deref().unwrap_or(&entry.tool_id),
                entry.seconds,
                format!("{:?}", entry.outcome),
                entry.error.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn status(rows: &[(String, String)]) -> Result<()> {
        let mut table = Table::new();

        for (label, value) in rows {
            table.add_row(row![label, value]);
        }
        table.printstd();

        Ok(())
    }
}
