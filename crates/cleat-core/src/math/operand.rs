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

//! Relational and merge operations on dynamically typed operands.
//!
//! The methods on [`Interval`] take `Interval<T>` by value, so comparing an
//! interval against anything else is a compile error. Code that holds
//! heterogeneous values behind `&dyn Any` (plugin registries, scripting
//! bridges, type-erased caches) can use the `*_dyn` variants defined here,
//! which downcast the operand first and report
//! [`IntervalError::TypeMismatch`] when it is not an `Interval<T>` of the
//! same integer type.
//!
//! Equality is the exception: a value of a different type is simply never
//! equal to an interval, so [`Interval::eq_dyn`] returns `false` instead of
//! failing.
//!
//! ```rust
//! # use cleat_core::math::interval::{Interval, IntervalError};
//! use std::any::Any;
//!
//! let a = Interval::new(1, 5).unwrap();
//! let values: [&dyn Any; 2] = [&Interval::new(4, 8).unwrap(), &"not an interval"];
//!
//! assert_eq!(a.merge_dyn(values[0]), Interval::new(1, 8));
//! assert!(matches!(
//!     a.merge_dyn(values[1]),
//!     Err(IntervalError::TypeMismatch { .. })
//! ));
//! assert!(!a.eq_dyn(values[1]));
//! ```

use crate::math::interval::{Interval, IntervalError};
use num_traits::PrimInt;
use std::{
    any::{Any, type_name},
    cmp::Ordering,
    fmt::{Debug, Display},
};

impl<T> Interval<T>
where
    T: PrimInt + Display + Debug + 'static,
{
    /// Downcasts `other` to an interval of the same integer type.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::TypeMismatch`] if `other` is not an `Interval<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(1i64, 2).unwrap();
    /// assert!(Interval::<i64>::downcast_operand(&iv).is_ok());
    /// assert!(Interval::<i32>::downcast_operand(&iv).is_err());
    /// assert!(Interval::<i64>::downcast_operand(&5).is_err());
    /// ```
    pub fn downcast_operand(other: &dyn Any) -> Result<&Self, IntervalError<T>> {
        other.downcast_ref::<Self>().ok_or_else(|| {
            log::trace!("operand is not an {}", type_name::<Self>());
            IntervalError::TypeMismatch {
                expected: type_name::<Self>(),
            }
        })
    }

    /// Returns `true` if `other` is an interval with the same bounds.
    ///
    /// Values of any other type are never equal to an interval.
    #[inline]
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.equals(*other))
    }

    /// Dynamic counterpart of [`Interval::compare`].
    pub fn cmp_dyn(&self, other: &dyn Any) -> Result<Ordering, IntervalError<T>> {
        let other = Self::downcast_operand(other)?;
        Ok(self.compare(*other))
    }

    /// Dynamic counterpart of [`Interval::overlaps`].
    pub fn overlaps_dyn(&self, other: &dyn Any) -> Result<bool, IntervalError<T>> {
        let other = Self::downcast_operand(other)?;
        Ok(self.overlaps(*other))
    }

    /// Dynamic counterpart of [`Interval::is_adjacent`].
    pub fn is_adjacent_dyn(&self, other: &dyn Any) -> Result<bool, IntervalError<T>> {
        let other = Self::downcast_operand(other)?;
        Ok(self.is_adjacent(*other))
    }

    /// Dynamic counterpart of [`Interval::dominates`].
    pub fn dominates_dyn(&self, other: &dyn Any) -> Result<bool, IntervalError<T>> {
        let other = Self::downcast_operand(other)?;
        Ok(self.dominates(*other))
    }

    /// Dynamic counterpart of [`Interval::is_dominated`].
    pub fn is_dominated_dyn(&self, other: &dyn Any) -> Result<bool, IntervalError<T>> {
        let other = Self::downcast_operand(other)?;
        Ok(self.is_dominated(*other))
    }

    /// Dynamic counterpart of [`Interval::merge`].
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::TypeMismatch`] if `other` is not an
    /// `Interval<T>`, or [`IntervalError::UnmergeableRange`] if it is one
    /// that neither overlaps nor is adjacent to `self`.
    pub fn merge_dyn(&self, other: &dyn Any) -> Result<Self, IntervalError<T>> {
        let other = Self::downcast_operand(other)?;
        self.merge(*other)
    }
}
