//! Frequency and gap statistics over the draw history.
//!
//! Every vector here has one slot per number: index `i` describes number `i + 1`.

use tracing::debug;

use crate::draw::{History, PICK_COUNT, POOL_SIZE};

/// A number together with how many draws it has been absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColdNumber {
    pub number: u8,
    pub gap: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberStats {
    /// Draws the frequency was counted over.
    pub window: usize,
    /// Raw occurrences within the window.
    pub counts: Vec<u32>,
    /// `counts` divided by the number of balls in the window.
    pub frequency: Vec<f64>,
    /// Draws since last seen; the history length if never seen.
    pub raw_gaps: Vec<usize>,
    /// `raw_gaps` divided by their maximum.
    pub gap: Vec<f64>,
}

impl NumberStats {
    pub fn compute(history: &History, window: usize) -> Self {
        let recent = history.recent(window);
        let counts = frequency_counts(history, window);
        let frequency = normalize_counts(&counts, recent.len());
        let raw_gaps = raw_gaps(history);
        let gap = normalize_gaps(&raw_gaps);

        debug!(window = recent.len(), draws = history.len(), "number statistics computed");

        Self {
            window: recent.len(),
            counts,
            frequency,
            raw_gaps,
            gap,
        }
    }

    /// Numbers absent for the longest, most overdue first.
    pub fn coldest(&self, limit: usize) -> Vec<ColdNumber> {
        coldest(&self.raw_gaps, limit)
    }
}

pub fn frequency_counts(history: &History, window: usize) -> Vec<u32> {
    let mut counts = vec![0u32; POOL_SIZE];
    for draw in history.recent(window) {
        for &n in draw.numbers() {
            counts[(n - 1) as usize] += 1;
        }
    }
    counts
}

/// Turns counts over `draws` draws into a distribution. All zeros when no draw
/// was counted.
pub fn normalize_counts(counts: &[u32], draws: usize) -> Vec<f64> {
    let total = (draws * PICK_COUNT) as f64;
    if total == 0.0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / total).collect()
}

pub fn raw_gaps(history: &History) -> Vec<usize> {
    (1..=POOL_SIZE as u8)
        .map(|n| {
            // Draws newer than the last appearance; never seen counts as the whole history
            history
                .newest_first()
                .position(|draw| draw.contains(n))
                .unwrap_or(history.len())
        })
        .collect()
}

/// Divides every gap by the largest one. All zeros when the largest is zero.
pub fn normalize_gaps(raw: &[usize]) -> Vec<f64> {
    let max = raw.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; raw.len()];
    }
    raw.iter().map(|&g| g as f64 / max as f64).collect()
}

/// Ranks numbers by raw gap, largest first. Equal gaps keep ascending number
/// order.
pub fn coldest(raw_gaps: &[usize], limit: usize) -> Vec<ColdNumber> {
    let mut ranked: Vec<ColdNumber> = raw_gaps
        .iter()
        .enumerate()
        .map(|(i, &gap)| ColdNumber {
            number: (i + 1) as u8,
            gap,
        })
        .collect();
    ranked.sort_by(|a, b| b.gap.cmp(&a.gap));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Draw;

    fn history(rows: &[[i64; 6]]) -> History {
        History::new(rows.iter().map(|r| Draw::new(r, None).unwrap()).collect())
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let stats = NumberStats::compute(&History::default(), 100);
        assert_eq!(stats.window, 0);
        assert_eq!(stats.counts, vec![0; POOL_SIZE]);
        assert!(stats.frequency.iter().all(|&f| f == 0.0));
        assert_eq!(stats.raw_gaps, vec![0; POOL_SIZE]);
        assert!(stats.gap.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_repeated_draw() {
        let h = history(&[[1, 2, 3, 4, 5, 6]; 5]);
        let stats = NumberStats::compute(&h, 100);

        for n in 0..6 {
            assert_eq!(stats.counts[n], 5);
            // 5 of the 30 balls in the window.
            assert!((stats.frequency[n] - 1.0 / 6.0).abs() < 1e-9);
            assert_eq!(stats.raw_gaps[n], 0);
            assert_eq!(stats.gap[n], 0.0);
        }
        for n in 6..POOL_SIZE {
            assert_eq!(stats.frequency[n], 0.0);
            assert_eq!(stats.raw_gaps[n], 5);
            assert!((stats.gap[n] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gap_counts_from_newest() {
        let h = history(&[
            [1, 2, 3, 4, 5, 6],
            [7, 8, 9, 10, 11, 12],
            [1, 13, 14, 15, 16, 17],
        ]);
        let gaps = raw_gaps(&h);

        assert_eq!(gaps[0], 0); // 1 is in the newest draw
        assert_eq!(gaps[6], 1); // 7 one draw back
        assert_eq!(gaps[1], 2); // 2 two draws back
        assert_eq!(gaps[42], 3); // 43 never drawn
    }

    #[test]
    fn test_window_limits_frequency_not_gap() {
        let h = history(&[
            [1, 2, 3, 4, 5, 6],
            [7, 8, 9, 10, 11, 12],
            [13, 14, 15, 16, 17, 18],
        ]);
        let stats = NumberStats::compute(&h, 2);

        assert_eq!(stats.window, 2);
        assert_eq!(stats.counts[0], 0);
        assert_eq!(stats.counts[6], 1);
        assert!((stats.frequency[6] - 1.0 / 12.0).abs() < 1e-9);
        assert_eq!(stats.raw_gaps[0], 2);
    }

    #[test]
    fn test_frequency_sums_to_one() {
        let h = history(&[
            [1, 2, 3, 4, 5, 6],
            [1, 8, 19, 25, 31, 43],
            [2, 9, 20, 26, 32, 42],
        ]);
        let stats = NumberStats::compute(&h, 100);
        let sum: f64 = stats.frequency.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_gaps() {
        assert_eq!(normalize_gaps(&[0, 2, 4]), vec![0.0, 0.5, 1.0]);
        assert_eq!(normalize_gaps(&[0, 0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_coldest_ranking() {
        let mut gaps = vec![0usize; POOL_SIZE];
        gaps[4] = 30;
        gaps[9] = 12;
        gaps[20] = 30;
        gaps[40] = 7;

        let cold = coldest(&gaps, 3);
        assert_eq!(
            cold,
            vec![
                ColdNumber { number: 5, gap: 30 },
                ColdNumber { number: 21, gap: 30 },
                ColdNumber { number: 10, gap: 12 },
            ]
        );
        assert_eq!(coldest(&gaps, 10).len(), 10);
    }
}
