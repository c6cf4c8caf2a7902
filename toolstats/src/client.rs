use crate::config::{StatsConfig, DATE_FORMAT};
use crate::error::{Result, StatsError};
use crate::months::MonthWindow;
use crate::types::{SessionRecord, Tool, ToolId};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Where tool catalogs and session records come from.
pub trait StatsSource {
    fn fetch_tools(&self) -> Result<Vec<Tool>>;

    fn fetch_sessions(&self, tool_id: &ToolId, window: &MonthWindow) -> Result<Vec<SessionRecord>>;
}

/// Blocking HTTP client for the stats service. Requests carry no timeout.
pub struct StatsClient {
    http: Client,
    tools_url: String,
    sessions_url: String,
}

impl StatsClient {
    pub fn new(config: &StatsConfig) -> Result<Self> {
        // The blocking client otherwise gives up after 30s.
        let http = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            http,
            tools_url: config.tools_url.clone(),
            sessions_url: config.sessions_url.clone(),
        })
    }
}

impl StatsSource for StatsClient {
    fn fetch_tools(&self) -> Result<Vec<Tool>> {
        let resp = self.http.get(&self.tools_url).send()?;
        read_json(resp, "tools")
    }

    fn fetch_sessions(&self, tool_id: &ToolId, window: &MonthWindow) -> Result<Vec<SessionRecord>> {
        let resp = self
            .http
            .get(&self.sessions_url)
            .query(&[
                ("tool_id", tool_id.to_string()),
                ("start_time", window.start.format(DATE_FORMAT).to_string()),
                ("end_time", window.end.format(DATE_FORMAT).to_string()),
            ])
            .send()?;
        read_json(resp, &format!("data for tool {tool_id}"))
    }
}

fn read_json<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        return Err(StatsError::Fetch {
            what: what.to_string(),
            status,
        });
    }

    let body = resp.bytes()?;
    serde_json::from_slice(&body).map_err(|source| StatsError::Decode {
        what: what.to_string(),
        source,
    })
}
