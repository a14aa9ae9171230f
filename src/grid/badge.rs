//! Badge vocabulary - the fixed mapping from status values to visual styles.

use chrono::NaiveDate;
use eframe::egui::Color32;

/// Visual category for a status/type badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Danger,
    Warning,
    Info,
    /// Neutral fallback for values outside the known vocabulary.
    Secondary,
}

impl BadgeStyle {
    /// Map a server status string to a style. Unknown values fall back to
    /// `Secondary` rather than failing to render.
    pub fn from_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "active" | "enabled" | "delivered" | "paid" | "published" | "completed" => {
                BadgeStyle::Success
            }
            "inactive" | "disabled" | "cancelled" | "expired" | "failed" | "blocked" => {
                BadgeStyle::Danger
            }
            "pending" | "paused" | "on_hold" => BadgeStyle::Warning,
            "scheduled" | "processing" | "out_for_delivery" | "trial" => BadgeStyle::Info,
            _ => BadgeStyle::Secondary,
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            BadgeStyle::Success
        } else {
            BadgeStyle::Danger
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            BadgeStyle::Success => Color32::from_rgb(46, 160, 67),
            BadgeStyle::Danger => Color32::from_rgb(218, 54, 51),
            BadgeStyle::Warning => Color32::from_rgb(187, 128, 9),
            BadgeStyle::Info => Color32::from_rgb(31, 111, 235),
            BadgeStyle::Secondary => Color32::from_rgb(110, 118, 129),
        }
    }
}

/// Bucket a subscription end date into a "days left" badge.
pub fn days_left_badge(end: NaiveDate, today: NaiveDate) -> (BadgeStyle, String) {
    let days = (end - today).num_days();
    if days < 0 {
        (BadgeStyle::Danger, "Expired".to_string())
    } else if days == 0 {
        (BadgeStyle::Danger, "Ends today".to_string())
    } else if days <= 3 {
        (BadgeStyle::Warning, format!("{} days left", days))
    } else if days <= 7 {
        (BadgeStyle::Info, format!("{} days left", days))
    } else {
        (BadgeStyle::Success, format!("{} days left", days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(BadgeStyle::from_status("active"), BadgeStyle::Success);
        assert_eq!(BadgeStyle::from_status("ACTIVE"), BadgeStyle::Success);
        assert_eq!(BadgeStyle::from_status("cancelled"), BadgeStyle::Danger);
        assert_eq!(BadgeStyle::from_status("pending"), BadgeStyle::Warning);
        assert_eq!(BadgeStyle::from_status("out_for_delivery"), BadgeStyle::Info);
    }

    #[test]
    fn test_unknown_status_falls_back_to_secondary() {
        assert_eq!(BadgeStyle::from_status("definitely-new-state"), BadgeStyle::Secondary);
        assert_eq!(BadgeStyle::from_status(""), BadgeStyle::Secondary);
    }

    #[test]
    fn test_bool_badge() {
        assert_eq!(BadgeStyle::from_bool(true), BadgeStyle::Success);
        assert_eq!(BadgeStyle::from_bool(false), BadgeStyle::Danger);
    }

    #[test]
    fn test_days_left_buckets() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let day = |d: u64| today + chrono::Days::new(d);

        assert_eq!(
            days_left_badge(today.pred_opt().unwrap(), today),
            (BadgeStyle::Danger, "Expired".to_string())
        );
        assert_eq!(
            days_left_badge(today, today),
            (BadgeStyle::Danger, "Ends today".to_string())
        );
        assert_eq!(days_left_badge(day(2), today).0, BadgeStyle::Warning);
        assert_eq!(days_left_badge(day(5), today).0, BadgeStyle::Info);
        assert_eq!(days_left_badge(day(30), today).0, BadgeStyle::Success);
        assert_eq!(days_left_badge(day(30), today).1, "30 days left");
    }
}
