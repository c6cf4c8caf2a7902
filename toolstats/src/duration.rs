use crate::error::DurationError;

/// Converts `"H:M:S"` into fractional hours. Hours and minutes are integers,
/// seconds may carry a fraction. Components are not range-checked.
pub fn parse_duration_hours(input: &str) -> Result<f64, DurationError> {
    let parts: Vec<&str> = input.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(DurationError::FieldCount(input.to_string()));
    };

    let hours = parse_whole(hours, "hours", input)?;
    let minutes = parse_whole(minutes, "minutes", input)?;
    let seconds = parse_field(seconds, "seconds", input)?;

    Ok(hours + minutes / 60.0 + seconds / 3600.0)
}

/// Integer text of any length, read as `f64` so huge counts do not overflow.
fn parse_whole(raw: &str, field: &'static str, input: &str) -> Result<f64, DurationError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(number_error(field, input));
    }
    parse_field(trimmed, field, input)
}

fn parse_field(raw: &str, field: &'static str, input: &str) -> Result<f64, DurationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| number_error(field, input))
}

fn number_error(field: &'static str, input: &str) -> DurationError {
    DurationError::Number {
        field,
        input: input.to_string(),
    }
}
