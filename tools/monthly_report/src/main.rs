use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::{Path, PathBuf};
use toolstats::client::StatsClient;
use toolstats::config::{self, StatsConfig};
use toolstats::months::MonthWindows;
use toolstats::pipeline::collect_monthly_data;
use toolstats::report;
use toolstats::types::MonthlySummary;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "monthly-report",
    about = "Summarize tool sessions and hours of use per calendar month as JSON"
)]
struct Cli {
    /// Tool catalog endpoint (overrides TOOLSTATS_TOOLS_URL).
    #[arg(long)]
    tools_url: Option<String>,

    /// Session records endpoint (overrides TOOLSTATS_SESSIONS_URL).
    #[arg(long)]
    sessions_url: Option<String>,

    /// Stop once a month ends on or before this date, YYYY-MM-DD (overrides TOOLSTATS_EARLIEST_DATE).
    #[arg(long, value_parser = parse_date_arg)]
    earliest: Option<NaiveDate>,

    /// Write the JSON report to a file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, mut config: StatsConfig) -> StatsConfig {
        if let Some(url) = &self.tools_url {
            config.tools_url = url.clone();
        }
        if let Some(url) = &self.sessions_url {
            config.sessions_url = url.clone();
        }
        if let Some(date) = self.earliest {
            config.earliest_date = date;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(StatsConfig::from_env()?);
    info!(
        tools_url = %config.tools_url,
        sessions_url = %config.sessions_url,
        earliest = %config.earliest_date,
        "starting monthly report"
    );

    let client = StatsClient::new(&config)?;
    let monthly_data = collect_monthly_data(&client, MonthWindows::from_now(config.earliest_date));
    emit(&monthly_data, cli.out.as_deref())
}

fn emit(monthly_data: &[MonthlySummary], out: Option<&Path>) -> Result<()> {
    let Some(out) = out else {
        return report::write_report(std::io::stdout().lock(), monthly_data);
    };

    let path = expand_tilde(out);
    report::write_report_file(&path, monthly_data)?;
    info!(path = ?path, entries = monthly_data.len(), "Wrote JSON report");
    Ok(())
}

fn parse_date_arg(raw: &str) -> std::result::Result<NaiveDate, String> {
    config::parse_date(raw).map_err(|e| format!("{e:#}"))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
