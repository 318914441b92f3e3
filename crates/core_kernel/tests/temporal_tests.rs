//! Unit tests for the fiscal calendar and date encodings

use chrono::NaiveDate;
use core_kernel::temporal::{compact_date, month_year, TemporalError};
use core_kernel::{fiscal_period, DateFormat, FiscalCalendar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod fiscal {
    use super::*;

    #[test]
    fn test_every_start_month_maps_to_period_one() {
        for start in 1..=12 {
            assert_eq!(fiscal_period(start, start), 1);
        }
    }

    #[test]
    fn test_all_periods_in_range() {
        for start in 1..=12 {
            for month in 1..=12 {
                let period = fiscal_period(month, start);
                assert!((1..=12).contains(&period), "month {month} start {start}");
            }
        }
    }

    #[test]
    fn test_each_start_month_is_a_permutation() {
        for start in 1..=12 {
            let mut periods: Vec<u32> = (1..=12).map(|m| fiscal_period(m, start)).collect();
            periods.sort_unstable();
            assert_eq!(periods, (1..=12).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_april_start() {
        assert_eq!(fiscal_period(4, 4), 1);
        assert_eq!(fiscal_period(3, 4), 12);
        assert_eq!(fiscal_period(9, 4), 6);
    }

    #[test]
    fn test_calendar_period_of() {
        let calendar = FiscalCalendar::new(10).unwrap();
        assert_eq!(calendar.start_month(), 10);
        assert_eq!(calendar.period_of(date(2020, 9, 15)), 12);
        assert_eq!(calendar.period_of(date(2020, 10, 1)), 1);
    }

    #[test]
    fn test_calendar_default_is_january() {
        assert_eq!(FiscalCalendar::default(), FiscalCalendar::calendar_year());
        assert_eq!(FiscalCalendar::default().period_of(date(2020, 9, 1)), 9);
    }

    #[test]
    fn test_calendar_fiscal_year_january_start_is_calendar_year() {
        let calendar = FiscalCalendar::calendar_year();
        assert_eq!(calendar.fiscal_year_of(date(2020, 1, 1)), 2020);
        assert_eq!(calendar.fiscal_year_of(date(2020, 12, 31)), 2020);
    }

    #[test]
    fn test_calendar_deserialize_validates() {
        let ok: FiscalCalendar = serde_json::from_str("7").unwrap();
        assert_eq!(ok.start_month(), 7);

        let err = serde_json::from_str::<FiscalCalendar>("13");
        assert!(err.is_err());
    }

    #[test]
    fn test_calendar_error() {
        assert!(matches!(FiscalCalendar::new(0), Err(TemporalError::InvalidMonth(0))));
    }
}

mod encodings {
    use super::*;

    #[test]
    fn test_compact_date_zero_pads() {
        assert_eq!(compact_date(date(2020, 1, 2)), "20200102");
        assert_eq!(compact_date(date(999, 12, 31)), "09991231");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(month_year(date(2020, 9, 30)), "September 2020");
        assert_eq!(month_year(date(2021, 1, 1)), "January 2021");
    }

    #[test]
    fn test_display_format_custom_pattern() {
        let format = DateFormat::new("%d.%m.%Y").unwrap();
        assert_eq!(format.pattern(), "%d.%m.%Y");
        assert_eq!(format.format(date(2020, 9, 5)), "05.09.2020");
    }

    #[test]
    fn test_display_format_parse() {
        let format: DateFormat = "%Y-%m-%d".parse().unwrap();
        assert_eq!(format.to_string(), "%Y-%m-%d");
        assert_eq!(format.format(date(2020, 9, 5)), "2020-09-05");
    }

    #[test]
    fn test_display_format_rejects_invalid() {
        assert_eq!(
            DateFormat::new("%Q"),
            Err(TemporalError::InvalidDateFormat("%Q".to_string()))
        );
    }

    #[test]
    fn test_display_format_serde() {
        let format: DateFormat = serde_json::from_str("\"%m/%d/%Y\"").unwrap();
        assert_eq!(format, DateFormat::default());
        assert!(serde_json::from_str::<DateFormat>("\"%Q\"").is_err());
    }
}
