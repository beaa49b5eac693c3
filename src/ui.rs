//! Display helpers shared by the page and the native runner

use chrono::DateTime;

use crate::draw::DrawResult;

/// Two-digit ball label (`7` -> `"07"`)
pub fn ball_label(n: i32) -> String {
    format!("{:02}", n)
}

/// Join a zone as ball labels
pub fn format_zone(values: &[i32]) -> String {
    values
        .iter()
        .map(|&n| ball_label(n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numbers of a draw on one line, bonus zone after " + "
pub fn format_result(result: &DrawResult) -> String {
    match &result.secondary {
        Some(bonus) if !bonus.is_empty() => {
            format!("{} + {}", format_zone(&result.primary), format_zone(bonus))
        }
        _ => format_zone(&result.primary),
    }
}

/// Message for the share sheet / clipboard
pub fn share_text(label: &str, result: &DrawResult) -> String {
    format!(
        "[Lucky Lots] My {} numbers:\n{}\nMay fortune find us all!",
        label,
        format_result(result)
    )
}

/// Format a timestamp relative to `now` (both Unix ms)
pub fn format_relative(now: f64, timestamp: f64) -> String {
    let diff_secs = (now - timestamp) / 1000.0;
    let diff_mins = diff_secs / 60.0;
    let diff_hours = diff_mins / 60.0;
    let diff_days = diff_hours / 24.0;

    if diff_days >= 1.0 {
        let days = diff_days.floor() as i64;
        if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else {
            DateTime::from_timestamp_millis(timestamp as i64)
                .map(|date| date.format("%-m/%-d/%y").to_string())
                .unwrap_or_else(|| "N/A".to_string())
        }
    } else if diff_hours >= 1.0 {
        let hours = diff_hours.floor() as i64;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if diff_mins >= 1.0 {
        let mins = diff_mins.floor() as i64;
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        }
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 60_000.0;
    const HOUR: f64 = 60.0 * MIN;
    const DAY: f64 = 24.0 * HOUR;

    #[test]
    fn test_ball_labels() {
        assert_eq!(ball_label(7), "07");
        assert_eq!(ball_label(38), "38");
        assert_eq!(ball_label(100), "100");
    }

    #[test]
    fn test_share_text_with_bonus() {
        let result = DrawResult {
            primary: vec![3, 9, 12, 20, 31, 38],
            secondary: Some(vec![4]),
        };
        assert_eq!(
            share_text("Power Lottery", &result),
            "[Lucky Lots] My Power Lottery numbers:\n03, 09, 12, 20, 31, 38 + 04\nMay fortune find us all!"
        );
    }

    #[test]
    fn test_format_result_without_bonus() {
        let result = DrawResult {
            primary: vec![1, 2, 39],
            secondary: None,
        };
        assert_eq!(format_result(&result), "01, 02, 39");
    }

    #[test]
    fn test_relative_times() {
        let now = 1_700_000_000_000.0;
        assert_eq!(format_relative(now, now - 5_000.0), "Just now");
        assert_eq!(format_relative(now, now - MIN), "1 min ago");
        assert_eq!(format_relative(now, now - 12.0 * MIN), "12 mins ago");
        assert_eq!(format_relative(now, now - HOUR), "1 hour ago");
        assert_eq!(format_relative(now, now - 5.0 * HOUR), "5 hours ago");
        assert_eq!(format_relative(now, now - DAY), "Yesterday");
        assert_eq!(format_relative(now, now - 3.0 * DAY), "3 days ago");
    }

    #[test]
    fn test_old_timestamps_show_date() {
        // 2024-02-10T12:00:00Z
        let then = 1_707_566_400_000.0;
        assert_eq!(format_relative(then + 30.0 * DAY, then), "2/10/24");
    }
}
