#[cfg(test)]
mod tests {
    use crate::date_utils::*;
    use chrono::{Datelike, NaiveDate, Weekday};
    use proptest::prelude::*;

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1970i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        // Grid is 5 or 6 full weeks and contains the whole month exactly once
        #[test]
        fn test_grid_covers_month(year in 1970i32..2100, month0 in 0u32..12) {
            let dates = calendar_dates(year, month0).unwrap();
            let days = days_in_month(year, month0).unwrap();

            prop_assert!(dates.len() == SHORT_GRID || dates.len() == LONG_GRID);
            prop_assert_eq!(dates[0].weekday(), Weekday::Sun);
            prop_assert_eq!(
                dates.iter().filter(|d| is_in_month(*d, month0, year)).count() as u32,
                days
            );
            for pair in dates.windows(2) {
                prop_assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
            }
        }

        #[test]
        fn test_is_same_day_reflexive_and_symmetric(
            a in any_date(),
            b in any_date(),
            h1 in 0u32..24,
            h2 in 0u32..24,
        ) {
            let a_time = a.and_hms_opt(h1, 0, 0).unwrap();
            let a_other_time = a.and_hms_opt(h2, 59, 59).unwrap();

            prop_assert!(is_same_day(&a, &a));
            prop_assert!(is_same_day(&a_time, &a_other_time));
            prop_assert_eq!(is_same_day(&a, &b), is_same_day(&b, &a));
            prop_assert_eq!(is_same_day(&a, &b), a == b);
        }

        // End time equals start plus duration modulo 24 hours
        #[test]
        fn test_time_range_end_is_start_plus_duration(
            start in 0u32..1440,
            duration in 0u32..5000,
        ) {
            let start_text = format_12h(start);
            let end_text = add_minutes_to_time(&start_text, duration);

            prop_assert_eq!(parse_12h_time(&start_text), Some(start));
            prop_assert_eq!(parse_12h_time(&end_text), Some((start + duration) % 1440));
        }

        #[test]
        fn test_month_navigation_round_trips(date in any_date(), delta in -36i32..36) {
            let moved = add_months(date, delta);
            prop_assert_eq!(moved.day(), 1);
            prop_assert_eq!(add_months(moved, -delta), first_of_month(date));
        }
    }
}
