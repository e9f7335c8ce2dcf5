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

//! # Cleat Core
//!
//! Closed-endpoint integer intervals for range coalescing, scheduling
//! windows, and coverage analysis.
//!
//! ## Modules
//!
//! - `math`: The `Interval<T>` value type over any primitive integer, with
//!   validated construction, overlap/adjacency/domination tests, merging,
//!   a total order (`lo` first, then `hi`), point iteration, and `&dyn Any`
//!   entry points for heterogeneous callers.
//!
//! ## Errors
//!
//! Fallible operations return `Result<_, IntervalError<T>>`:
//!
//! - `InvalidRange` when constructing with `hi < lo`.
//! - `UnmergeableRange` when merging intervals separated by a gap.
//! - `TypeMismatch` when a `*_dyn` operation receives something that is not
//!   an interval of the same integer type.
//!
//! ## Logging
//!
//! Rejections are reported through the `log` facade at `trace`/`debug`
//! level. The crate never installs a logger.
//!
//! ```rust
//! use cleat_core::math::interval::Interval;
//!
//! let a = Interval::new(1, 3).unwrap();
//! let b = Interval::new(3, 7).unwrap();
//! assert_eq!(a.merge(b), Interval::new(1, 7));
//! assert_eq!(format!("{}", a), "[1, 3]");
//! assert_eq!(format!("{:?}", a), "Interval(1, 3)");
//! ```

pub mod math;
