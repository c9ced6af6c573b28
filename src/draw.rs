use chrono::NaiveDate;
use thiserror::Error;

/// Highest number that can be drawn. Numbers run from 1 to `POOL_SIZE`.
pub const POOL_SIZE: usize = 43;
/// Numbers drawn per result.
pub const PICK_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("expected 6 numbers, got {0}")]
    WrongCount(usize),

    #[error("number {0} is outside 1-43")]
    OutOfRange(i64),

    #[error("number {0} appears more than once")]
    Duplicate(u8),
}

/// One historical result. Only constructible through [`Draw::new`], so every
/// `Draw` holds exactly six distinct numbers in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    date: Option<NaiveDate>,
    numbers: [u8; PICK_COUNT],
}

impl Draw {
    pub fn new(values: &[i64], date: Option<NaiveDate>) -> Result<Self, DrawError> {
        if values.len() != PICK_COUNT {
            return Err(DrawError::WrongCount(values.len()));
        }

        let mut numbers = [0u8; PICK_COUNT];
        for (slot, &value) in numbers.iter_mut().zip(values) {
            if !(1..=POOL_SIZE as i64).contains(&value) {
                return Err(DrawError::OutOfRange(value));
            }
            *slot = value as u8;
        }

        for i in 0..PICK_COUNT {
            for j in (i + 1)..PICK_COUNT {
                if numbers[i] == numbers[j] {
                    return Err(DrawError::Duplicate(numbers[i]));
                }
            }
        }

        Ok(Self { date, numbers })
    }

    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.numbers
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }
}

/// Draws ordered oldest to newest. The last element is the most recent draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    draws: Vec<Draw>,
}

impl History {
    /// Builds a history from draws already in chronological order.
    pub fn new(draws: Vec<Draw>) -> Self {
        Self { draws }
    }

    /// Builds a history from dated draws in any order.
    ///
    /// If every draw carries a date the draws are stably sorted by it, otherwise
    /// the given order is trusted.
    pub fn from_unordered(mut draws: Vec<Draw>) -> Self {
        if draws.iter().all(|d| d.date.is_some()) {
            draws.sort_by_key(|d| d.date);
        }
        Self { draws }
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    /// The most recent `count` draws (all of them if there are fewer).
    pub fn recent(&self, count: usize) -> &[Draw] {
        let start = self.draws.len().saturating_sub(count);
        &self.draws[start..]
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &Draw> {
        self.draws.iter().rev()
    }

    /// First and last known draw dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.draws.iter().find_map(Draw::date)?;
        let last = self.draws.iter().rev().find_map(Draw::date)?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_new_draw_ok() {
        let draw = Draw::new(&[1, 7, 13, 22, 35, 43], None).unwrap();
        assert_eq!(draw.numbers(), &[1, 7, 13, 22, 35, 43]);
        assert!(draw.contains(43));
        assert!(!draw.contains(2));
    }

    #[test]
    fn test_new_draw_wrong_count() {
        assert_eq!(Draw::new(&[1, 2, 3, 4, 5], None), Err(DrawError::WrongCount(5)));
        assert_eq!(
            Draw::new(&[1, 2, 3, 4, 5, 6, 7], None),
            Err(DrawError::WrongCount(7))
        );
    }

    #[test]
    fn test_new_draw_out_of_range() {
        assert_eq!(Draw::new(&[0, 2, 3, 4, 5, 6], None), Err(DrawError::OutOfRange(0)));
        assert_eq!(Draw::new(&[1, 2, 3, 4, 5, 44], None), Err(DrawError::OutOfRange(44)));
        assert_eq!(Draw::new(&[1, 2, 3, 4, 5, 300], None), Err(DrawError::OutOfRange(300)));
    }

    #[test]
    fn test_new_draw_duplicate() {
        assert_eq!(Draw::new(&[9, 2, 3, 9, 5, 6], None), Err(DrawError::Duplicate(9)));
    }

    #[test]
    fn test_recent_window() {
        let draws: Vec<Draw> = (0..5)
            .map(|i| Draw::new(&[1 + i, 10, 20, 30, 40, 43], None).unwrap())
            .collect();
        let history = History::new(draws);

        assert_eq!(history.recent(2).len(), 2);
        assert_eq!(history.recent(2)[1].numbers()[0], 5);
        assert_eq!(history.recent(100).len(), 5);
        assert_eq!(history.newest_first().next().unwrap().numbers()[0], 5);
    }

    #[test]
    fn test_from_unordered_sorts_when_all_dated() {
        let newer = Draw::new(&[1, 2, 3, 4, 5, 6], date(2024, 3, 4)).unwrap();
        let older = Draw::new(&[7, 8, 9, 10, 11, 12], date(2024, 2, 26)).unwrap();
        let history = History::from_unordered(vec![newer.clone(), older.clone()]);

        assert_eq!(history.draws(), &[older, newer]);
        assert_eq!(history.date_range(), Some((date(2024, 2, 26).unwrap(), date(2024, 3, 4).unwrap())));
    }

    #[test]
    fn test_from_unordered_keeps_order_without_dates() {
        let a = Draw::new(&[1, 2, 3, 4, 5, 6], date(2024, 3, 4)).unwrap();
        let b = Draw::new(&[7, 8, 9, 10, 11, 12], None).unwrap();
        let history = History::from_unordered(vec![a.clone(), b.clone()]);

        assert_eq!(history.draws(), &[a, b]);
    }

    #[test]
    fn test_empty_history() {
        let history = History::default();
        assert!(history.is_empty());
        assert!(history.recent(100).is_empty());
        assert_eq!(history.date_range(), None);
    }
}
