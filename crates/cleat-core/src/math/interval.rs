// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;
use std::{
    cmp::{Ordering, max, min},
    fmt::{Debug, Display},
    iter::FusedIterator,
    ops::{BitOr, Bound, RangeBounds, RangeInclusive},
};
use thiserror::Error;

/// A closed interval `[lo, hi]` where both bounds are part of the interval.
///
/// This struct represents a contiguous, non-empty set of integers. It supports
/// the relational queries overlap, adjacency and domination, and merging two
/// intervals that touch or overlap into the smallest interval covering both.
///
/// Ordering is lexicographic: intervals are compared by `lo` first and by `hi`
/// when the lower bounds are equal.
///
/// # Invariants
/// `lo` must always be less than or equal to `hi`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T>
where
    T: PrimInt,
{
    lo: T,
    hi: T,
}

/// The error type for fallible interval operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError<T>
where
    T: PrimInt + Display + Debug,
{
    /// The upper bound lies below the lower bound.
    #[error("invalid range: hi ({hi}) must be greater than or equal to lo ({lo})")]
    InvalidRange { lo: T, hi: T },
    /// A dynamically typed operand was not an interval of the expected type.
    #[error("type mismatch: expected an operand of type `{expected}`")]
    TypeMismatch { expected: &'static str },
    /// The intervals are separated by a gap and cannot be merged.
    #[error("cannot merge {left} and {right}: intervals neither overlap nor are adjacent")]
    UnmergeableRange { left: Interval<T>, right: Interval<T> },
}

/// An iterator over the integer points contained within an `Interval`.
///
/// Both bounds are yielded. The iterator never steps past `hi`, so an
/// interval ending at `T::max_value()` is iterated without overflow.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::math::interval::Interval;
///
/// let iv = Interval::new(1, 4).unwrap();
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for IntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining() {
            Some(n) => (n, Some(n)),
            // More than `usize::MAX` points remain.
            None => (usize::MAX, None),
        }
    }
}

impl<T> IntervalIterator<T>
where
    T: PrimInt,
{
    /// Number of points left in `[front, back]`, or `None` if it exceeds `usize::MAX`.
    ///
    /// The distance is taken in 128-bit arithmetic, since `back - front`
    /// overflows `T` for any signed interval wider than `T::max_value()`.
    fn remaining(&self) -> Option<usize> {
        let dist = match (self.front.to_i128(), self.back.to_i128()) {
            (Some(front), Some(back)) => u128::try_from(back.checked_sub(front)?).ok()?,
            // Only `u128` bounds above `i128::MAX` end up here.
            _ => self.back.to_u128()? - self.front.to_u128()?,
        };
        usize::try_from(dist.checked_add(1)?).ok()
    }
}

impl<T> DoubleEndedIterator for IntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

/// # Panics
///
/// `len()` panics if more than `usize::MAX` points remain, which only
/// happens for 64-bit (on 64-bit targets) and 128-bit intervals.
impl<T> ExactSizeIterator for IntervalIterator<T> where T: PrimInt {}

impl<T> FusedIterator for IntervalIterator<T> where T: PrimInt {}

impl<T> Interval<T>
where
    T: PrimInt + Display + Debug,
{
    /// Creates a new `Interval`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidRange`] if `hi < lo`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::{Interval, IntervalError};
    ///
    /// let iv = Interval::new(0, 9).unwrap();
    /// assert_eq!(iv.length(), 10);
    ///
    /// assert_eq!(
    ///     Interval::new(5, 3),
    ///     Err(IntervalError::InvalidRange { lo: 5, hi: 3 })
    /// );
    /// ```
    #[inline]
    pub fn new(lo: T, hi: T) -> Result<Self, IntervalError<T>> {
        if hi < lo {
            log::trace!("rejecting interval bounds lo = {lo}, hi = {hi}");
            return Err(IntervalError::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Merges `self` and `other` into the smallest interval covering both.
    ///
    /// The inputs are left untouched; the result is a fresh value.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::UnmergeableRange`] if the intervals neither
    /// overlap nor are adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let a = Interval::new(1, 5).unwrap();
    /// let b = Interval::new(4, 8).unwrap();
    /// assert_eq!(a.merge(b), Interval::new(1, 8));
    ///
    /// // Shared endpoint
    /// let c = Interval::new(8, 9).unwrap();
    /// assert_eq!(b.merge(c), Interval::new(4, 9));
    ///
    /// // Gap of more than one unit
    /// let d = Interval::new(11, 12).unwrap();
    /// assert!(a.merge(d).is_err());
    /// ```
    #[inline]
    pub fn merge(&self, other: Self) -> Result<Self, IntervalError<T>> {
        if !self.can_merge(other) {
            log::debug!("refusing to merge disjoint intervals {self} and {other}");
            return Err(IntervalError::UnmergeableRange {
                left: *self,
                right: other,
            });
        }
        Ok(Self::new_unchecked(
            min(self.lo, other.lo),
            max(self.hi, other.hi),
        ))
    }
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new `Interval` without checking invariants in release builds.
    ///
    /// The caller must ensure `lo <= hi`.
    /// This function contains a `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let iv = Interval::new_unchecked(0, 10);
    /// assert_eq!(iv.hi(), 10);
    /// ```
    #[inline]
    pub fn new_unchecked(lo: T, hi: T) -> Self {
        debug_assert!(
            lo <= hi,
            "Invalid interval: lo must be less than or equal to hi"
        );
        Self { lo, hi }
    }

    /// Creates the single-point interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let iv = Interval::point(7);
    /// assert_eq!(iv.length(), 1);
    /// ```
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    /// Returns the inclusive lower bound of the interval.
    #[inline]
    pub const fn lo(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound of the interval.
    #[inline]
    pub const fn hi(&self) -> T {
        self.hi
    }

    /// Returns the number of integers in the interval (`hi - lo + 1`).
    ///
    /// The count is returned as a `T`, so it overflows like primitive
    /// arithmetic when it does not fit in `T` (a panic in debug builds). Any
    /// signed interval wider than `T::max_value()` is affected, e.g.
    /// `[-100i8, 100]` or `[i32::MIN, i32::MAX]`. Use
    /// [`Interval::checked_length`] or `iter().len()` for such intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(-5, -1).unwrap().length(), 5);
    /// assert_eq!(Interval::point(2).length(), 1);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.hi - self.lo + T::one()
    }

    /// Returns the number of integers in the interval, or `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(0u8, 9).unwrap().checked_length(), Some(10));
    /// assert_eq!(Interval::new(0u8, 255).unwrap().checked_length(), None);
    /// ```
    #[inline]
    pub fn checked_length(&self) -> Option<T> {
        self.hi.checked_sub(&self.lo)?.checked_add(&T::one())
    }

    /// Returns `true` if `self` and `other` have the same bounds.
    ///
    /// Equivalent to `==`.
    #[inline]
    pub fn equals(&self, other: Self) -> bool {
        *self == other
    }

    /// Compares by `lo`, then by `hi`.
    ///
    /// Equivalent to [`Ord::cmp`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    /// # use std::cmp::Ordering;
    ///
    /// let a = Interval::new(5, 6).unwrap();
    /// let b = Interval::new(3, 10).unwrap();
    /// assert_eq!(a.compare(b), Ordering::Greater);
    /// ```
    #[inline]
    pub fn compare(&self, other: Self) -> Ordering {
        self.cmp(&other)
    }

    /// Returns `true` if the intervals share at least one integer.
    ///
    /// Since both bounds are inclusive, intervals that touch at a single
    /// endpoint overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let a = Interval::new(1, 3).unwrap();
    /// assert!(a.overlaps(Interval::new(3, 7).unwrap())); // Shared endpoint
    /// assert!(!a.overlaps(Interval::new(4, 6).unwrap())); // Adjacent
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// Returns `true` if the intervals are disjoint but consecutive, i.e. one
    /// ends exactly one unit before the other starts.
    ///
    /// Overlapping intervals are never adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let a = Interval::new(1, 3).unwrap();
    /// assert!(a.is_adjacent(Interval::new(4, 6).unwrap()));
    /// assert!(!a.is_adjacent(Interval::new(3, 6).unwrap())); // Overlaps
    /// assert!(!a.is_adjacent(Interval::new(5, 6).unwrap())); // Gap
    /// ```
    #[inline]
    pub fn is_adjacent(&self, other: Self) -> bool {
        // Checked, so that `hi == T::max_value()` has no right neighbour.
        let one = T::one();
        self.hi.checked_add(&one) == Some(other.lo) || other.hi.checked_add(&one) == Some(self.lo)
    }

    /// Returns `true` if the intervals either overlap or are adjacent.
    ///
    /// This is the precondition of [`Interval::merge`].
    #[inline]
    pub fn can_merge(&self, other: Self) -> bool {
        self.overlaps(other) || self.is_adjacent(other)
    }

    /// Returns `true` if `other` is fully contained within `self`.
    ///
    /// Every interval dominates itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let outer = Interval::new(1, 10).unwrap();
    /// let inner = Interval::new(3, 5).unwrap();
    /// assert!(outer.dominates(inner));
    /// assert!(!inner.dominates(outer));
    /// assert!(outer.dominates(outer));
    /// ```
    #[inline]
    pub fn dominates(&self, other: Self) -> bool {
        self.lo <= other.lo && self.hi >= other.hi
    }

    /// Returns `true` if `self` is fully contained within `other`.
    #[inline]
    pub fn is_dominated(&self, other: Self) -> bool {
        other.dominates(*self)
    }

    /// Returns `true` if `value` lies in `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10).unwrap();
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Creates an iterator over the points in the interval.
    #[inline]
    pub fn iter(&self) -> IntervalIterator<T> {
        IntervalIterator {
            front: self.lo,
            back: self.hi,
            exhausted: false,
        }
    }
}

impl<T> BitOr for Interval<T>
where
    T: PrimInt + Display + Debug,
{
    type Output = Result<Self, IntervalError<T>>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl<T> Debug for Interval<T>
where
    T: PrimInt + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", self.lo, self.hi)
    }
}

impl<T> Display for Interval<T>
where
    T: PrimInt + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl<T> RangeBounds<T> for Interval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.lo)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.hi)
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<(T, T)> for Interval<T>
where
    T: PrimInt + Display + Debug,
{
    type Error = IntervalError<T>;

    #[inline]
    fn try_from((lo, hi): (T, T)) -> Result<Self, Self::Error> {
        Self::new(lo, hi)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for Interval<T>
where
    T: PrimInt + Display + Debug,
{
    type Error = IntervalError<T>;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (lo, hi) = range.into_inner();
        Self::new(lo, hi)
    }
}

impl<T> From<Interval<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.lo..=iv.hi
    }
}
