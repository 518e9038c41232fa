use std::iter::FusedIterator;

use crate::error::{CookieError, Result};

/// Lazy enumeration of every way to share `total` teaspoons out over `groups`
/// ordered slots.
///
/// Compositions come out in lexicographic ascending order, the same order a
/// depth-first split produces: the first slot counts up from 0 to `total`, and
/// for each first-slot value the remainder is split over the other slots the
/// same way. Only the current composition is held, so memory stays O(groups)
/// however many compositions there are.
#[derive(Debug, Clone)]
pub struct Compositions {
    pending: Option<Vec<u32>>,
    remaining: Option<u128>,
}

impl Compositions {
    /// Start a fresh enumeration.
    ///
    /// Fails with [`CookieError::InvalidArgument`] when `groups` is zero.
    pub fn new(total: u32, groups: usize) -> Result<Self> {
        if groups == 0 {
            return Err(CookieError::InvalidArgument(format!(
                "cannot split {} teaspoons over zero ingredients",
                total
            )));
        }

        // Lexicographically smallest: everything in the last slot.
        let mut first = vec![0; groups];
        first[groups - 1] = total;

        Ok(Self {
            pending: Some(first),
            remaining: composition_count(total, groups),
        })
    }
}

impl Iterator for Compositions {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        self.pending = successor(&current);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (0, None),
        }
    }
}

impl FusedIterator for Compositions {}

/// Lexicographic successor of `parts`, or `None` if `parts` is the last one.
///
/// The rightmost slot that still has teaspoons somewhere after it gains one;
/// everything after it resets and the leftover lands in the last slot.
fn successor(parts: &[u32]) -> Option<Vec<u32>> {
    let last = parts.len() - 1;
    let mut suffix = parts[last];

    for k in (0..last).rev() {
        if suffix > 0 {
            let mut next = parts.to_vec();
            next[k] += 1;
            next[k + 1..].fill(0);
            next[last] = suffix - 1;
            return Some(next);
        }
        suffix += parts[k];
    }

    None
}

/// Number of compositions of `total` into `groups` non-negative parts,
/// `C(total + groups - 1, groups - 1)`.
///
/// Zero groups has no compositions. Returns `None` if the count overflows `u128`.
pub fn composition_count(total: u32, groups: usize) -> Option<u128> {
    if groups == 0 {
        return Some(0);
    }

    let n = u128::from(total) + groups as u128 - 1;
    let k = (groups as u128 - 1).min(u128::from(total));

    // After step i the accumulator is C(n - k + i, i), so the division is exact.
    let mut count: u128 = 1;
    for i in 1..=k {
        count = count.checked_mul(n - k + i)? / i;
    }
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(total: u32, groups: usize) -> Vec<Vec<u32>> {
        Compositions::new(total, groups).unwrap().collect()
    }

    #[test]
    fn test_single_group_yields_total() {
        assert_eq!(collect(100, 1), vec![vec![100]]);
        assert_eq!(collect(0, 1), vec![vec![0]]);
    }

    #[test]
    fn test_zero_groups_is_rejected() {
        let err = Compositions::new(100, 0).unwrap_err();
        assert!(matches!(err, CookieError::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_total_yields_all_zero_split() {
        assert_eq!(collect(0, 3), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn test_whole_total_in_first_slot_is_included() {
        assert_eq!(collect(2, 2), vec![vec![0, 2], vec![1, 1], vec![2, 0]]);
    }

    #[test]
    fn test_depth_first_order() {
        let expected = vec![
            vec![0, 0, 2],
            vec![0, 1, 1],
            vec![0, 2, 0],
            vec![1, 0, 1],
            vec![1, 1, 0],
            vec![2, 0, 0],
        ];
        assert_eq!(collect(2, 3), expected);
    }

    #[test]
    fn test_iterators_are_independent() {
        let mut first = Compositions::new(3, 2).unwrap();
        first.next();
        let fresh: Vec<_> = Compositions::new(3, 2).unwrap().collect();
        assert_eq!(fresh.len(), 4);
        assert_eq!(first.count(), 3);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let mut compositions = Compositions::new(100, 2).unwrap();
        assert_eq!(compositions.size_hint(), (101, Some(101)));
        compositions.next();
        assert_eq!(compositions.size_hint(), (100, Some(100)));
    }

    #[test]
    fn test_composition_count() {
        assert_eq!(composition_count(100, 1), Some(1));
        assert_eq!(composition_count(100, 2), Some(101));
        assert_eq!(composition_count(100, 4), Some(176_851));
        assert_eq!(composition_count(0, 5), Some(1));
        assert_eq!(composition_count(7, 0), Some(0));
    }

    #[test]
    fn test_composition_count_overflow() {
        assert_eq!(composition_count(u32::MAX, 40), None);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut compositions = Compositions::new(1, 1).unwrap();
        assert_eq!(compositions.next(), Some(vec![1]));
        assert_eq!(compositions.next(), None);
        assert_eq!(compositions.next(), None);
    }
}
