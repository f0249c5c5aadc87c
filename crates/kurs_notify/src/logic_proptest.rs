#[cfg(test)]
mod proptests {
    use crate::logic::{candidate_kinds, parse_event_date};
    use crate::models::ReminderKind;
    use chrono::NaiveDate;
    use kurs_config::ReminderPolicy;
    use proptest::prelude::*;

    proptest! {
        /// Any calendar date survives the lenient parser in all three
        /// shapes the catalog produces.
        #[test]
        fn parse_recovers_the_calendar_day(
            year in 2020i32..2040,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();

            let bare = format!("{:04}-{:02}-{:02}", year, month, day);
            prop_assert_eq!(parse_event_date(&bare), Some(date));

            let naive = format!("{}T{:02}:{:02}:00", bare, hour, minute);
            prop_assert_eq!(parse_event_date(&naive), Some(date));

            let rfc3339 = format!("{}T{:02}:{:02}:00Z", bare, hour, minute);
            prop_assert_eq!(parse_event_date(&rfc3339), Some(date));
        }

        /// The exact-day rule proposes a reminder only on the three
        /// threshold days.
        #[test]
        fn exact_day_fires_only_on_thresholds(days_until in -5i64..20) {
            let kinds = candidate_kinds(ReminderPolicy::ExactDay, days_until);
            match days_until {
                10 => prop_assert_eq!(kinds, vec![ReminderKind::TenDays]),
                3 => prop_assert_eq!(kinds, vec![ReminderKind::ThreeDays]),
                1 => prop_assert_eq!(kinds, vec![ReminderKind::OneDay]),
                _ => prop_assert!(kinds.is_empty()),
            }
        }

        /// The catch-up rule proposes exactly the kinds whose threshold is
        /// crossed, most urgent first.
        #[test]
        fn catch_up_proposes_crossed_thresholds(days_until in 0i64..=10) {
            let kinds = candidate_kinds(ReminderPolicy::CatchUp, days_until);

            prop_assert!(!kinds.is_empty());
            prop_assert!(kinds.iter().all(|k| days_until <= k.threshold_days()));

            let thresholds: Vec<i64> = kinds.iter().map(|k| k.threshold_days()).collect();
            let mut sorted = thresholds.clone();
            sorted.sort_unstable();
            prop_assert_eq!(thresholds, sorted, "most urgent first");
        }
    }
}
