//! Sorted, merged index of closed intervals.
//!
//! [`RangeIndex`] tracks coverage over a numeric axis as the smallest
//! possible list of disjoint closed intervals. Inserting a range merges it
//! with every stored interval it overlaps or touches.

use std::fmt;

/// A closed range `[low, high]` with `low <= high`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Create an interval from two bounds and auto-canonicalize so that
    /// `low <= high`.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Whether `value` lies within the closed interval.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Whether the two intervals share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl<T: PartialOrd + Copy> From<(T, T)> for Interval<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

#[inline]
fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Disjoint closed intervals kept sorted by `low`.
///
/// No two stored intervals overlap or share an endpoint; such pairs are
/// merged on insertion. Insertion never loses covered range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RangeIndex<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: PartialOrd + Copy> RangeIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Insert `interval`, merging it with any stored intervals it overlaps
    /// or touches.
    pub fn insert(&mut self, interval: impl Into<Interval<T>>) {
        let mut merged = interval.into();

        // Bisect-right on (low, high).
        let insertion_point = self
            .intervals
            .partition_point(|iv| (iv.low, iv.high) <= (merged.low, merged.high));

        let mut start = insertion_point;
        let mut end = insertion_point;

        if let Some(left) = insertion_point
            .checked_sub(1)
            .map(|i| self.intervals[i])
        {
            // `left.low <= merged.low` holds by the bisect.
            if merged.low <= left.high {
                merged = Interval {
                    low: left.low,
                    high: max_of(left.high, merged.high),
                };
                start = insertion_point - 1;
            }
        }

        // Absorb everything to the right that the merged interval reaches.
        while let Some(right) = self.intervals.get(end) {
            if right.low > merged.high {
                break;
            }
            merged.high = max_of(right.high, merged.high);
            end += 1;
        }

        self.intervals.splice(start..end, [merged]);
    }

    /// Whether `value` is covered by any stored interval.
    pub fn contains(&self, value: T) -> bool {
        let i = self.intervals.partition_point(|iv| iv.low <= value);
        i > 0 && self.intervals[i - 1].contains(value)
    }

    /// The stored interval covering `value`, if any.
    pub fn find(&self, value: T) -> Option<Interval<T>> {
        let i = self.intervals.partition_point(|iv| iv.low <= value);
        let iv = *self.intervals.get(i.checked_sub(1)?)?;
        iv.contains(value).then_some(iv)
    }
}

impl<T> RangeIndex<T> {
    /// Number of disjoint intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }
}

impl<T: PartialOrd + Copy, I: Into<Interval<T>>> Extend<I> for RangeIndex<T> {
    fn extend<It: IntoIterator<Item = I>>(&mut self, iter: It) {
        for iv in iter {
            self.insert(iv);
        }
    }
}

impl<T: PartialOrd + Copy, I: Into<Interval<T>>> FromIterator<I> for RangeIndex<T> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a, T> IntoIterator for &'a RangeIndex<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

// Deserialization goes through `Interval::new` and `insert`, so the bounds
// are ordered and the stored list is sorted and disjoint whatever the input.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Interval<T>
where
    T: serde::Deserialize<'de> + PartialOrd + Copy,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Bounds<B> {
            low: B,
            high: B,
        }

        let Bounds { low, high } = <Bounds<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(low, high))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RangeIndex<T>
where
    T: serde::Deserialize<'de> + PartialOrd + Copy,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let intervals = <Vec<Interval<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(intervals.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<T: Copy + PartialOrd>(index: &RangeIndex<T>) -> Vec<(T, T)> {
        index.iter().map(|iv| (iv.low(), iv.high())).collect()
    }

    #[test]
    fn insertion_sequence() {
        let mut index = RangeIndex::new();
        index.insert((3, 8));
        assert_eq!(pairs(&index), vec![(3, 8)]);
        index.insert((4, 6));
        assert_eq!(pairs(&index), vec![(3, 8)]);
        index.insert((5, 10));
        assert_eq!(pairs(&index), vec![(3, 10)]);
        index.insert((0, 12));
        assert_eq!(pairs(&index), vec![(0, 12)]);
        index.insert((20, 22));
        assert_eq!(pairs(&index), vec![(0, 12), (20, 22)]);
        index.insert((20, 22));
        assert_eq!(pairs(&index), vec![(0, 12), (20, 22)]);
        index.insert((18, 21));
        assert_eq!(pairs(&index), vec![(0, 12), (18, 22)]);
        index.insert((15, 30));
        assert_eq!(pairs(&index), vec![(0, 12), (15, 30)]);
        index.insert((10, 20));
        assert_eq!(pairs(&index), vec![(0, 30)]);
        index.insert((35, 40));
        assert_eq!(pairs(&index), vec![(0, 30), (35, 40)]);
        index.insert((45, 50));
        assert_eq!(pairs(&index), vec![(0, 30), (35, 40), (45, 50)]);
        index.insert((60, 100));
        assert_eq!(pairs(&index), vec![(0, 30), (35, 40), (45, 50), (60, 100)]);
        index.insert((5, 55));
        assert_eq!(pairs(&index), vec![(0, 55), (60, 100)]);
        index.insert((-1, 110));
        assert_eq!(pairs(&index), vec![(-1, 110)]);
    }

    #[test]
    fn bridging_interval_merges_chain() {
        let mut index: RangeIndex<i64> =
            [(0, 12), (15, 30), (35, 40), (45, 50), (60, 100)].into_iter().collect();
        assert_eq!(index.len(), 5);
        index.insert((5, 55));
        assert_eq!(pairs(&index), vec![(0, 55), (60, 100)]);
    }

    #[test]
    fn touching_intervals_merge() {
        let mut index = RangeIndex::new();
        index.insert((0, 5));
        index.insert((5, 9));
        assert_eq!(pairs(&index), vec![(0, 9)]);

        index.insert((-3, 0));
        assert_eq!(pairs(&index), vec![(-3, 9)]);
    }

    #[test]
    fn gap_of_one_point_keeps_intervals_apart() {
        let index: RangeIndex<i32> = [(0, 4), (6, 9)].into_iter().collect();
        assert_eq!(pairs(&index), vec![(0, 4), (6, 9)]);
        assert!(!index.contains(5));
    }

    #[test]
    fn same_low_wider_interval_absorbs_existing() {
        let mut index = RangeIndex::new();
        index.insert((2, 4));
        index.insert((2, 9));
        assert_eq!(pairs(&index), vec![(2, 9)]);
        index.insert((2, 3));
        assert_eq!(pairs(&index), vec![(2, 9)]);
    }

    #[test]
    fn float_bounds() {
        let index: RangeIndex<f64> = [(0.5, 1.5), (1.5, 2.25), (3.0, 4.0)]
            .into_iter()
            .collect();
        assert_eq!(pairs(&index), vec![(0.5, 2.25), (3.0, 4.0)]);
        assert!(index.contains(2.0));
        assert!(!index.contains(2.5));
    }

    #[test]
    fn inverted_bounds_are_canonicalized() {
        let iv = Interval::new(9, 3);
        assert_eq!((iv.low(), iv.high()), (3, 9));

        let mut index = RangeIndex::new();
        index.insert((8, 1));
        assert_eq!(pairs(&index), vec![(1, 8)]);
    }

    #[test]
    fn contains_and_find() {
        let index: RangeIndex<i32> = [(0, 3), (10, 20)].into_iter().collect();
        assert!(index.contains(0));
        assert!(index.contains(3));
        assert!(index.contains(15));
        assert!(!index.contains(-1));
        assert!(!index.contains(7));
        assert!(!index.contains(21));
        assert_eq!(index.find(12), Some(Interval::new(10, 20)));
        assert_eq!(index.find(5), None);
    }

    #[test]
    fn interval_overlap_is_closed() {
        let a = Interval::new(0, 5);
        assert!(a.overlaps(&Interval::new(5, 8)));
        assert!(a.overlaps(&Interval::new(-2, 0)));
        assert!(!a.overlaps(&Interval::new(6, 8)));
        assert_eq!(a.to_string(), "[0, 5]");
    }
}
