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

//! # Math Primitives
//!
//! Closed integer intervals and the relational algebra over them.
//!
//! ## Submodules
//!
//! - `interval`: A generic `[lo, hi]` interval type with validated
//!   construction, predicates (overlap, adjacency, domination, point
//!   containment), merging, lexicographic ordering, and iteration support
//!   (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`). Includes conversions to/from `RangeInclusive` and
//!   `RangeBounds`.
//! - `operand`: `*_dyn` variants of the relational and merge operations
//!   that accept `&dyn Any` operands and report a type mismatch instead of
//!   failing to compile.
//!
//! ## Conventions
//!
//! Both bounds are inclusive. Two intervals that share an endpoint overlap;
//! two intervals where one ends exactly one unit before the other starts are
//! adjacent. Either relation is enough to merge them.

pub mod interval;
pub mod operand;
