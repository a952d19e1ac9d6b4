use chrono::NaiveDate;

/// Parse the stay range from two `YYYY-MM-DD` date inputs. Both dates must
/// be picked and the range must run forward; everything else about a
/// booking is validated by the backend.
pub fn parse_stay_dates(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if start.is_empty() || end.is_empty() {
        return Err("Please select start and end dates.".to_string());
    }
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .map_err(|_| "The start date is not a valid date.".to_string())?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
        .map_err(|_| "The end date is not a valid date.".to_string())?;
    if end <= start {
        return Err("The end date must be after the start date.".to_string());
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_dates_are_required() {
        assert!(parse_stay_dates("", "2026-03-05").is_err());
        assert!(parse_stay_dates("2026-03-01", "").is_err());
        assert!(parse_stay_dates("", "").is_err());
    }

    #[test]
    fn range_must_run_forward() {
        assert!(parse_stay_dates("2026-03-05", "2026-03-01").is_err());
        // a zero-night stay is not a stay
        assert!(parse_stay_dates("2026-03-01", "2026-03-01").is_err());
    }

    #[test]
    fn valid_range_parses() {
        let (start, end) = parse_stay_dates("2026-03-01", "2026-03-05").unwrap();
        assert_eq!(start.to_string(), "2026-03-01");
        assert_eq!(end.to_string(), "2026-03-05");
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(parse_stay_dates("not-a-date", "2026-03-05").is_err());
        assert!(parse_stay_dates("2026-03-01", "03/05/2026").is_err());
    }
}
