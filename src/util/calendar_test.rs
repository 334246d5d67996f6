use super::*;

// =============================================================
// Month navigation
// =============================================================

#[test]
fn prev_and_next_wrap_across_years() {
    let january = Month { year: 2026, month: 1 };
    assert_eq!(january.prev(), Month { year: 2025, month: 12 });
    assert_eq!(Month { year: 2025, month: 12 }.next(), january);
}

#[test]
fn title_names_the_month() {
    assert_eq!(Month { year: 2026, month: 3 }.title(), "March 2026");
}

// =============================================================
// Month grid
// =============================================================

#[test]
fn february_2026_fills_exactly_four_weeks() {
    // 2026-02-01 is a Sunday and February has 28 days.
    let grid = month_grid(Month { year: 2026, month: 2 });
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|week| week.len() == 7));
    assert_eq!(grid[0][0], NaiveDate::from_ymd_opt(2026, 2, 1));
    assert_eq!(grid[3][6], NaiveDate::from_ymd_opt(2026, 2, 28));
}

#[test]
fn may_2026_pads_the_leading_weekdays() {
    // 2026-05-01 is a Friday: five blank cells lead the first week.
    let grid = month_grid(Month { year: 2026, month: 5 });
    assert_eq!(grid.len(), 6);
    assert!(grid[0][..5].iter().all(Option::is_none));
    assert_eq!(grid[0][5], NaiveDate::from_ymd_opt(2026, 5, 1));
    assert!(grid[5][6].is_none());
}

#[test]
fn grid_days_are_contiguous() {
    let grid = month_grid(Month { year: 2026, month: 8 });
    let days: Vec<NaiveDate> = grid.into_iter().flatten().flatten().collect();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    assert!(days.windows(2).all(|pair| pair[1] == pair[0].succ_opt().unwrap()));
}

// =============================================================
// Wire dates
// =============================================================

#[test]
fn event_day_accepts_dates_and_datetimes() {
    let expected = NaiveDate::from_ymd_opt(2026, 3, 10);
    assert_eq!(event_day("2026-03-10"), expected);
    assert_eq!(event_day("2026-03-10T18:00:00.000Z"), expected);
    assert_eq!(event_day("not a date"), None);
}

#[test]
fn long_date_spells_out_the_day() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    assert_eq!(long_date(date), "Saturday, March 14, 2026");
}
