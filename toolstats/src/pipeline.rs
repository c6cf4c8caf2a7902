use crate::client::StatsSource;
use crate::error::Result;
use crate::months::MonthWindow;
use crate::summary::summarize_sessions;
use crate::types::{MonthlySummary, Tool};
use tracing::{error, info};

/// Lists tools, then summarizes every (month, tool) pair in window order.
///
/// Never fails: a failed tool listing yields an empty report, and a failed
/// (month, tool) attempt is logged and left out. Whatever was gathered is
/// returned so the caller can always print it.
pub fn collect_monthly_data<S, I>(source: &S, windows: I) -> Vec<MonthlySummary>
where
    S: StatsSource + ?Sized,
    I: IntoIterator<Item = MonthWindow>,
{
    let tools = match source.fetch_tools() {
        Ok(tools) => tools,
        Err(e) => {
            error!("An error occurred: {e}");
            return Vec::new();
        }
    };
    info!(tools = tools.len(), "fetched tool list");

    let mut monthly_data = Vec::new();
    for window in windows {
        info!("Fetching data for {window}");
        let month = window.label();
        for tool in &tools {
            match summarize_month(source, tool, &window) {
                Ok(summary) => monthly_data.push(summary),
                Err(e) => error!(tool_id = %tool.id, %month, "An error occurred: {e}"),
            }
        }
    }
    monthly_data
}

fn summarize_month<S>(source: &S, tool: &Tool, window: &MonthWindow) -> Result<MonthlySummary>
where
    S: StatsSource + ?Sized,
{
    let sessions = source.fetch_sessions(&tool.id, window)?;
    let summary = summarize_sessions(&tool.id, &sessions)?;
    Ok(MonthlySummary::new(window.label(), tool, summary))
}
