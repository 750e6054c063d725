//! Fast queries over a precomputed business day sequence.
//!
//! Generate the sequence once with
//! [`Calendar::business_days_in_range`](super::Calendar::business_days_in_range)
//! and answer range, next-day and shift queries by binary search. Answers
//! agree with the calendar wherever the sequence covers the query.

use super::Direction;
use crate::types::{Date, IntervalBounds};

/// A borrowed, strictly ascending sequence of business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDaySeq<'a> {
    days: &'a [Date],
}

impl<'a> BusinessDaySeq<'a> {
    /// Wraps a sorted slice of business days.
    ///
    /// # Panics
    ///
    /// Panics if `days` is not strictly ascending.
    #[must_use]
    pub fn new(days: &'a [Date]) -> Self {
        assert!(
            days.windows(2).all(|pair| pair[0] < pair[1]),
            "business day sequence must be strictly ascending"
        );
        Self { days }
    }

    /// The underlying days.
    #[must_use]
    pub fn as_slice(&self) -> &'a [Date] {
        self.days
    }

    /// Number of business days in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True if the sequence holds no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Index of the first day not before `date`.
    fn lower_bound(&self, date: Date) -> usize {
        self.days.partition_point(|day| *day < date)
    }

    fn contains_at(&self, index: usize, date: Date) -> bool {
        self.days.get(index) == Some(&date)
    }

    /// The days between `from` and `to`, endpoints included by `bounds`.
    ///
    /// Equal to intersecting the sequence with the calendar's own
    /// [`business_days_in_range`](super::Calendar::business_days_in_range).
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[must_use]
    pub fn filter_range(&self, from: Date, to: Date, bounds: IntervalBounds) -> &'a [Date] {
        assert!(
            from <= to,
            "business day range requires from <= to, got {from} > {to}"
        );
        let Some((first, last)) = bounds.inclusive_window(from, to) else {
            return &self.days[..0];
        };
        let start = self.lower_bound(first);
        let end = self.days.partition_point(|day| *day <= last);
        &self.days[start..end]
    }

    /// The nearest business day after (or before) `date`.
    ///
    /// With `start_on_date`, `date` itself is returned if it is in the
    /// sequence. `None` if `date` lies outside the sequence or the answer
    /// would.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[must_use]
    pub fn next_business_day(
        &self,
        date: Date,
        direction: Direction,
        start_on_date: bool,
    ) -> Option<Date> {
        let (Some(&min), Some(&max)) = (self.days.first(), self.days.last()) else {
            panic!("cannot search an empty business day sequence");
        };
        if date < min || date > max {
            return None;
        }

        let index = self.lower_bound(date);
        let on_date = self.contains_at(index, date);
        if start_on_date && on_date {
            return Some(date);
        }

        match direction {
            Direction::Forward if on_date => self.days.get(index + 1).copied(),
            Direction::Forward => self.days.get(index).copied(),
            Direction::Backward => index.checked_sub(1).and_then(|i| self.days.get(i)).copied(),
        }
    }

    /// Moves `n` business days from `date`; negative `n` moves backward.
    ///
    /// Same counting as
    /// [`Calendar::add_business_days`](super::Calendar::add_business_days).
    /// `None` if the result falls outside the sequence.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero, or if `date` is not strictly inside the
    /// sequence (the first day is allowed for forward shifts, the last for
    /// backward shifts).
    #[must_use]
    pub fn add_business_days(&self, date: Date, n: i32, start_count_on_date: bool) -> Option<Date> {
        assert!(n != 0, "business day shift count must be non-zero");
        let (Some(&min), Some(&max)) = (self.days.first(), self.days.last()) else {
            panic!("cannot shift within an empty business day sequence");
        };
        assert!(
            (min < date && date < max) || (date == min && n > 0) || (date == max && n < 0),
            "date {date} is outside the business day sequence {min}..{max}"
        );

        let index = self.lower_bound(date);
        let on_date = self.contains_at(index, date);
        let steps = i64::from(n.unsigned_abs()) - 1;

        // Index of the first step's landing day, then walk the remainder.
        let target = match Direction::of(n) {
            Direction::Forward => {
                let first = if on_date && !start_count_on_date { index + 1 } else { index };
                first as i64 + steps
            }
            Direction::Backward => {
                let first = if on_date && start_count_on_date {
                    index as i64
                } else {
                    index as i64 - 1
                };
                first - steps
            }
        };

        usize::try_from(target)
            .ok()
            .and_then(|i| self.days.get(i))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{Calendar, USFederalCalendar, WeekendCalendar};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn federal_new_year() -> Vec<Date> {
        USFederalCalendar.business_days_in_range(d(2014, 12, 31), d(2015, 1, 6), IntervalBounds::Closed)
    }

    #[test]
    fn test_federal_new_year_sequence() {
        let days = federal_new_year();
        assert_eq!(days, vec![d(2014, 12, 31), d(2015, 1, 2), d(2015, 1, 5), d(2015, 1, 6)]);

        let seq = BusinessDaySeq::new(&days);
        assert_eq!(seq.next_business_day(d(2015, 1, 1), Direction::Forward, false), Some(d(2015, 1, 2)));
        assert_eq!(seq.add_business_days(d(2015, 1, 2), 2, false), Some(d(2015, 1, 6)));
    }

    #[test]
    fn test_filter_range() {
        let days = federal_new_year();
        let seq = BusinessDaySeq::new(&days);

        assert_eq!(
            seq.filter_range(d(2015, 1, 1), d(2015, 1, 5), IntervalBounds::Closed),
            &[d(2015, 1, 2), d(2015, 1, 5)]
        );
        assert_eq!(
            seq.filter_range(d(2015, 1, 2), d(2015, 1, 5), IntervalBounds::Open),
            &[] as &[Date]
        );
        assert_eq!(
            seq.filter_range(d(2015, 1, 2), d(2015, 1, 5), IntervalBounds::RightOpen),
            &[d(2015, 1, 2)]
        );
        assert_eq!(
            seq.filter_range(d(2015, 1, 5), d(2015, 1, 5), IntervalBounds::Closed),
            &[d(2015, 1, 5)]
        );
        assert!(seq
            .filter_range(d(2015, 1, 5), d(2015, 1, 5), IntervalBounds::LeftOpen)
            .is_empty());
    }

    #[test]
    fn test_next_business_day_directions() {
        let days = federal_new_year();
        let seq = BusinessDaySeq::new(&days);

        assert_eq!(seq.next_business_day(d(2015, 1, 2), Direction::Forward, false), Some(d(2015, 1, 5)));
        assert_eq!(seq.next_business_day(d(2015, 1, 2), Direction::Forward, true), Some(d(2015, 1, 2)));
        assert_eq!(seq.next_business_day(d(2015, 1, 3), Direction::Backward, false), Some(d(2015, 1, 2)));
        assert_eq!(seq.next_business_day(d(2015, 1, 2), Direction::Backward, false), Some(d(2014, 12, 31)));
        assert_eq!(seq.next_business_day(d(2014, 12, 31), Direction::Backward, false), None);
        assert_eq!(seq.next_business_day(d(2015, 1, 6), Direction::Forward, false), None);
        assert_eq!(seq.next_business_day(d(2015, 1, 7), Direction::Backward, false), None);
    }

    #[test]
    fn test_add_business_days_backward() {
        let days = federal_new_year();
        let seq = BusinessDaySeq::new(&days);

        assert_eq!(seq.add_business_days(d(2015, 1, 6), -1, false), Some(d(2015, 1, 5)));
        assert_eq!(seq.add_business_days(d(2015, 1, 5), -1, true), Some(d(2015, 1, 5)));
        assert_eq!(seq.add_business_days(d(2015, 1, 6), -3, false), Some(d(2014, 12, 31)));
        assert_eq!(seq.add_business_days(d(2015, 1, 6), -4, false), None);
        assert_eq!(seq.add_business_days(d(2015, 1, 1), -1, true), Some(d(2014, 12, 31)));
    }

    #[test]
    fn test_matches_calendar_shifts() {
        let cal = WeekendCalendar::default();
        let days = cal.business_days_in_range(d(2025, 1, 1), d(2025, 12, 31), IntervalBounds::Closed);
        let seq = BusinessDaySeq::new(&days);

        let mut date = d(2025, 2, 1);
        while date < d(2025, 11, 1) {
            for n in [-5, -1, 1, 3, 10] {
                for start in [false, true] {
                    assert_eq!(
                        seq.add_business_days(date, n, start),
                        cal.add_business_days(date, n, start),
                        "{date} {n} {start}"
                    );
                }
            }
            date = date.succ();
        }
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn test_unsorted_panics() {
        let days = [d(2025, 1, 3), d(2025, 1, 2)];
        let _ = BusinessDaySeq::new(&days);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_next_in_empty_sequence_panics() {
        let _ = BusinessDaySeq::new(&[]).next_business_day(d(2025, 1, 2), Direction::Forward, false);
    }

    #[test]
    #[should_panic(expected = "outside the business day sequence")]
    fn test_shift_from_boundary_panics() {
        let days = federal_new_year();
        let _ = BusinessDaySeq::new(&days).add_business_days(d(2014, 12, 31), -1, false);
    }
}
