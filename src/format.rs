use std::time::Duration;

const NANOS_PER_CENTISECOND: u128 = 10_000_000;

/// Renders a duration as `HH:MM:SS.CC`, truncating below the centisecond.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_centis = elapsed.as_nanos() / NANOS_PER_CENTISECOND;

    let centis = total_centis % 100;
    let total_secs = total_centis / 100;

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.00");
    }

    #[test]
    fn hours_minutes_seconds_centis() {
        assert_eq!(format_elapsed(Duration::from_millis(3_661_230)), "01:01:01.23");
    }

    #[test]
    fn truncates_below_centisecond() {
        assert_eq!(format_elapsed(Duration::from_millis(1_509)), "00:00:01.50");
        assert_eq!(format_elapsed(Duration::from_nanos(9_999_999)), "00:00:00.00");
        assert_eq!(format_elapsed(Duration::from_nanos(10_000_000)), "00:00:00.01");
    }

    #[test]
    fn minute_and_hour_boundaries() {
        assert_eq!(format_elapsed(Duration::from_secs(59)), "00:00:59.00");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "00:01:00.00");
        assert_eq!(format_elapsed(Duration::from_secs(3599)), "00:59:59.00");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "01:00:00.00");
    }

    #[test]
    fn hours_keep_growing() {
        assert_eq!(format_elapsed(Duration::from_secs(100 * 3600 + 5)), "100:00:05.00");
    }
}
