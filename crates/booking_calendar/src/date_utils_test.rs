#[cfg(test)]
mod tests {
    use crate::clock::FixedClock;
    use crate::date_utils::*;
    use crate::error::CalendarError;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_dates_august_2025_uses_six_rows() {
        // August 2025 starts on a Friday and has 31 days
        let dates = calendar_dates(2025, 7).unwrap();

        assert_eq!(dates.len(), LONG_GRID);
        assert_eq!(dates[0], date(2025, 7, 27));
        assert_eq!(dates[5], date(2025, 8, 1));
        assert_eq!(dates[41], date(2025, 9, 6));
        assert_eq!(dates.iter().filter(|d| is_in_month(*d, 7, 2025)).count(), 31);
    }

    #[test]
    fn test_calendar_dates_september_2025_uses_five_rows() {
        // September 2025 starts on a Monday and has 30 days
        let dates = calendar_dates(2025, 8).unwrap();

        assert_eq!(dates.len(), SHORT_GRID);
        assert_eq!(dates[0], date(2025, 8, 31));
        assert_eq!(dates[1], date(2025, 9, 1));
        assert_eq!(dates[34], date(2025, 10, 4));
    }

    #[test]
    fn test_calendar_dates_month_starting_on_sunday_has_no_leading_padding() {
        // February 2026 starts on a Sunday with 28 days: a full extra week of March
        let dates = calendar_dates(2026, 1).unwrap();

        assert_eq!(dates.len(), SHORT_GRID);
        assert_eq!(dates[0], date(2026, 2, 1));
        assert_eq!(dates[28], date(2026, 3, 1));
        assert_eq!(dates[34], date(2026, 3, 7));
    }

    #[test]
    fn test_calendar_dates_saturday_start_with_thirty_days() {
        // November 2025 starts on a Saturday and has 30 days
        let dates = calendar_dates(2025, 10).unwrap();
        assert_eq!(dates.len(), LONG_GRID);
        assert_eq!(dates[6], date(2025, 11, 1));
    }

    #[test]
    fn test_calendar_dates_rejects_invalid_month() {
        assert!(matches!(
            calendar_dates(2025, 12),
            Err(CalendarError::InvalidMonth(12))
        ));
    }

    #[test]
    fn test_grid_size_matches_weekday_heuristic_for_every_start_and_length() {
        for leading in 0..7u32 {
            for days in 28..=31u32 {
                let heuristic = if (leading == 5 && days == 31) || (leading == 6 && days >= 30) {
                    LONG_GRID
                } else {
                    SHORT_GRID
                };
                assert_eq!(
                    grid_size(leading, days),
                    heuristic,
                    "leading={} days={}",
                    leading,
                    days
                );
                // and the grid always holds the whole month
                assert!(leading + days <= grid_size(leading, days) as u32);
            }
        }
    }

    #[test]
    fn test_calendar_rows_are_weeks_starting_sunday() {
        let rows = calendar_rows(&calendar_dates(2025, 7).unwrap());
        assert_eq!(rows.len(), 6);
        for row in &rows {
            assert_eq!(row.len(), DAYS_PER_WEEK);
            assert_eq!(row[0].weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2025, 1).unwrap(), 28);
        assert_eq!(days_in_month(2025, 7).unwrap(), 31);
        assert_eq!(days_in_month(2025, 8).unwrap(), 30);
        assert_eq!(end_of_month(2025, 11).unwrap(), date(2025, 12, 31));
        assert_eq!(start_of_month(2025, 0).unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_add_months_lands_on_first_and_wraps_years() {
        assert_eq!(add_months(date(2025, 12, 15), 1), date(2026, 1, 1));
        assert_eq!(add_months(date(2026, 1, 31), -1), date(2025, 12, 1));
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 1));
        assert_eq!(add_months(date(2025, 8, 8), 0), date(2025, 8, 1));
    }

    #[test]
    fn test_is_same_day_ignores_time_of_day() {
        let morning = date(2025, 8, 8).and_hms_opt(0, 0, 1).unwrap();
        let night = date(2025, 8, 8).and_hms_opt(23, 59, 59).unwrap();

        assert!(is_same_day(&morning, &night));
        assert!(is_same_day(&date(2025, 8, 8), &night));
        assert!(!is_same_day(&date(2025, 8, 9), &night));
        assert!(!is_same_day(&date(2024, 8, 8), &date(2025, 8, 8)));
    }

    #[test]
    fn test_is_past_compares_whole_days() {
        let clock = FixedClock(date(2025, 8, 8).and_hms_opt(15, 30, 0).unwrap());

        assert!(is_past(&date(2025, 8, 7), &clock));
        assert!(is_past(&date(2024, 12, 31), &clock));
        assert!(!is_past(&date(2025, 8, 8), &clock));
        // earlier on the same day is still today
        assert!(!is_past(&date(2025, 8, 8).and_hms_opt(8, 0, 0).unwrap(), &clock));
        assert!(!is_past(&date(2025, 8, 9), &clock));
    }

    #[test]
    fn test_is_in_month_requires_month_and_year() {
        assert!(is_in_month(&date(2025, 8, 1), 7, 2025));
        assert!(!is_in_month(&date(2024, 8, 1), 7, 2025));
        assert!(!is_in_month(&date(2025, 9, 1), 7, 2025));
    }

    #[test]
    fn test_long_and_month_year_formats() {
        assert_eq!(format_long_date(date(2025, 8, 8)), "Friday, August 8, 2025");
        assert_eq!(format_long_date(date(2025, 12, 25)), "Thursday, December 25, 2025");
        assert_eq!(format_month_year(date(2025, 8, 8)), "August 2025");
    }

    #[test]
    fn test_twelve_and_twenty_four_hour_formats() {
        assert_eq!(format_12h(0), "12:00am");
        assert_eq!(format_12h(9 * 60), "9:00am");
        assert_eq!(format_12h(12 * 60 + 30), "12:30pm");
        assert_eq!(format_12h(23 * 60 + 5), "11:05pm");
        assert_eq!(format_24h(9 * 60 + 30), "09:30");
        assert_eq!(format_24h(17 * 60), "17:00");
    }

    #[test]
    fn test_parse_12h_time() {
        assert_eq!(parse_12h_time("9:00am"), Some(540));
        assert_eq!(parse_12h_time("12:00am"), Some(0));
        assert_eq!(parse_12h_time("12:15pm"), Some(735));
        assert_eq!(parse_12h_time("11:45PM"), Some(1425));
        assert_eq!(parse_12h_time("noon"), None);
        assert_eq!(parse_12h_time("13:00pm"), None);
        assert_eq!(parse_12h_time("9:75am"), None);
        assert_eq!(parse_12h_time("09:00"), None);
    }

    #[test]
    fn test_format_time_range_rolls_over_noon() {
        assert_eq!(
            format_time_range("11:45am", 30, "America/New_York"),
            "11:45am - 12:15pm (EST)"
        );
        assert_eq!(
            format_time_range("8:00am", 30, "Eastern European Time"),
            "8:00am - 8:30am (EET)"
        );
    }

    #[test]
    fn test_format_time_range_wraps_past_midnight() {
        assert_eq!(format_time_range("11:30pm", 60, "UTC"), "11:30pm - 12:30am (UTC)");
        assert_eq!(format_time_range("10:00pm", 24 * 60, "UTC"), "10:00pm - 10:00pm (UTC)");
    }

    #[test]
    fn test_format_time_range_keeps_unparseable_start() {
        assert_eq!(format_time_range("noon", 30, "UTC"), "noon - noon (UTC)");
        // out-of-range hour is not wrapped
        assert_eq!(add_minutes_to_time("13:00pm", 30), "13:00pm");
    }

    #[test]
    fn test_format_time_range_on_resolves_iana_names() {
        assert_eq!(
            format_time_range_on(date(2025, 8, 8), "9:00am", 45, "Europe/Zurich"),
            "9:00am - 9:45am (CEST)"
        );
        assert_eq!(
            format_time_range_on(date(2025, 8, 8), "9:00am", 45, "Pacific Standard Time"),
            "9:00am - 9:45am (PST)"
        );
    }
}
