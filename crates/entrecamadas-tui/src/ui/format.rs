use chrono::{DateTime, Local, Utc};

/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len == 1 {
        return "…".to_string();
    }

    let mut truncated: String = s.chars().take(max_len - 1).collect();
    truncated.push('…');
    truncated
}

/// Day/month and time of a list row, in local time ("19/10 21:05")
pub fn short_date(created: &DateTime<Utc>) -> String {
    created.with_timezone(&Local).format("%d/%m %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("stars", 10), "stars");
        assert_eq!(truncate_with_ellipsis("stars", 5), "stars");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_with_ellipsis("coração aberto", 8), "coração…");
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_short_date_shape() {
        let created = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap();
        let formatted = short_date(&created);
        // Local offset moves the hour, never the shape
        assert_eq!(formatted.len(), "09/03 12:30".len());
        assert_eq!(&formatted[2..3], "/");
        assert_eq!(&formatted[5..6], " ");
    }
}
