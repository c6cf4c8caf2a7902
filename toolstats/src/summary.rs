use crate::duration::parse_duration_hours;
use crate::error::DurationError;
use crate::types::{SessionRecord, ToolId, ToolSummary};

/// Session count and total hours for one tool. Any malformed duration fails
/// the whole summary.
pub fn summarize_sessions(
    tool_id: &ToolId,
    sessions: &[SessionRecord],
) -> Result<ToolSummary, DurationError> {
    let mut hours_of_use = 0.0;
    for session in sessions {
        hours_of_use += parse_duration_hours(&session.duration)?;
    }

    Ok(ToolSummary {
        tool_id: tool_id.clone(),
        session_count: sessions.len(),
        hours_of_use,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions(durations: &[&str]) -> Vec<SessionRecord> {
        durations
            .iter()
            .map(|d| SessionRecord {
                duration: d.to_string(),
            })
            .collect()
    }

    #[test]
    fn counts_sessions_and_sums_hours() {
        let summary =
            summarize_sessions(&ToolId::from(1), &sessions(&["2:00:00", "1:30:00"])).unwrap();
        assert_eq!(summary.tool_id, ToolId::from(1));
        assert_eq!(summary.session_count, 2);
        assert!((summary.hours_of_use - 3.5).abs() < 1e-9);
    }

    #[test]
    fn empty_input_is_zero() {
        let summary = summarize_sessions(&ToolId::from(4), &[]).unwrap();
        assert_eq!(summary.session_count, 0);
        assert_eq!(summary.hours_of_use, 0.0);
    }

    #[test]
    fn one_bad_duration_fails_the_summary() {
        let err = summarize_sessions(&ToolId::from(1), &sessions(&["1:00:00", "soon"])).unwrap_err();
        assert!(matches!(err, DurationError::FieldCount(ref s) if s == "soon"));
    }
}
