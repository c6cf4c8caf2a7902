use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier as handed out by the stats service; echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolId::Number(n) => write!(f, "{n}"),
            ToolId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ToolId {
    fn from(n: i64) -> Self {
        ToolId::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
}

/// One recorded use of a tool. Only `duration` ("H:M:S") is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSummary {
    pub tool_id: ToolId,
    pub session_count: usize,
    pub hours_of_use: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// `YYYY-MM`
    pub month: String,
    pub tool_id: ToolId,
    pub tool_name: String,
    pub session_count: usize,
    pub hours_of_use: f64,
}

impl MonthlySummary {
    pub fn new(month: String, tool: &Tool, summary: ToolSummary) -> Self {
        Self {
            month,
            tool_id: summary.tool_id,
            tool_name: tool.name.clone(),
            session_count: summary.session_count,
            hours_of_use: summary.hours_of_use,
        }
    }
}
