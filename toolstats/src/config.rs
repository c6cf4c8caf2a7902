use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;

// ── Default endpoints ───────────────────────────────────────────────────

/// Catalog of tracked tools.
pub const DEFAULT_TOOLS_URL: &str = "https://np.nova-labs.org/stats/tools";

/// Per-tool session records, filtered by `tool_id`, `start_time`, `end_time`.
pub const DEFAULT_SESSIONS_URL: &str = "https://np.nova-labs.org/stats/tool-sessions";

// ── Default floor date ──────────────────────────────────────────────────

const DEFAULT_EARLIEST_DATE: (i32, u32, u32) = (2020, 1, 27);

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ── Config struct ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsConfig {
    pub tools_url: String,
    pub sessions_url: String,
    /// No window ending on or before this date is requested.
    pub earliest_date: NaiveDate,
}

impl Default for StatsConfig {
    fn default() -> Self {
        let (y, m, d) = DEFAULT_EARLIEST_DATE;
        Self {
            tools_url: DEFAULT_TOOLS_URL.to_string(),
            sessions_url: DEFAULT_SESSIONS_URL.to_string(),
            earliest_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl StatsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let earliest_date = match non_blank(&lookup, "TOOLSTATS_EARLIEST_DATE") {
            Some(raw) => parse_date(&raw).context("invalid TOOLSTATS_EARLIEST_DATE")?,
            None => defaults.earliest_date,
        };

        Ok(Self {
            tools_url: non_blank(&lookup, "TOOLSTATS_TOOLS_URL").unwrap_or(defaults.tools_url),
            sessions_url: non_blank(&lookup, "TOOLSTATS_SESSIONS_URL")
                .unwrap_or(defaults.sessions_url),
            earliest_date,
        })
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("expected YYYY-MM-DD, got {raw:?}"))
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Some(val.trim().to_string()),
        _ => None,
    }
}
