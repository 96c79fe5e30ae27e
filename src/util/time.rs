use chrono::{DateTime, Utc};

/// Renders how long ago `since` was, at the coarsest whole unit.
///
/// Days win over hours and hours over minutes. Anything under a minute, including
/// timestamps slightly in the future from clock skew, is "just now".
pub fn format_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - since).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "just now".to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn picks_coarsest_unit() {
        let now = Utc::now();

        assert_eq!(format_elapsed(now - Duration::seconds(30), now), "just now");
        assert_eq!(format_elapsed(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_elapsed(now - Duration::minutes(59), now), "59 minutes ago");
        assert_eq!(format_elapsed(now - Duration::minutes(125), now), "2 hours ago");
        assert_eq!(format_elapsed(now - Duration::hours(49), now), "2 days ago");
    }

    #[test]
    fn future_timestamp_is_just_now() {
        let now = Utc::now();

        assert_eq!(format_elapsed(now + Duration::minutes(5), now), "just now");
    }
}
