#![no_std]

//! `DynArray`: a growable contiguous array of `i32` with random-access cursors.
//!
//! `DynArray` keeps its elements in a single heap buffer and grows the buffer
//! geometrically as elements are pushed, so a push sequence stays amortized
//! constant time. Every access is bounds-checked; positions are addressed by
//! index or through [`Cursor`] values handed out by the array.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut array = DynArray::new();
//! array.push(10);
//! array.push(20);
//! array.push(30);
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array[1], 20);
//!
//! let total: i32 = array.iter().sum();
//! assert_eq!(total, 60);
//! ```
//!
//! # Growth Policy
//!
//! A push into a full buffer reallocates to exactly `max(len * 2, 1)` slots.
//! [`reserve`](DynArray::reserve) allocates exactly the requested capacity,
//! never more, and [`clear`](DynArray::clear) and [`pop`](DynArray::pop)
//! never shrink the buffer.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut array = DynArray::new();
//! assert_eq!(array.capacity(), 0);
//!
//! array.push(1); // grows 0 -> 1
//! array.push(2); // grows 1 -> 2
//! array.push(3); // grows 2 -> 4
//! array.push(4); // fits
//! assert_eq!(array.capacity(), 4);
//!
//! array.push(5); // grows 4 -> 8
//! assert_eq!(array.capacity(), 8);
//! ```
//!
//! # Cursors
//!
//! [`begin`](DynArray::begin) and [`end`](DynArray::end) delimit the live
//! elements as a half-open range. A [`Cursor`] is a `Copy` value that moves
//! by signed offsets, compares and subtracts against cursors of the same
//! array, and iterates front to back. A cursor borrows the array, so the
//! borrow checker rejects any use after a reallocating operation.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let array = DynArray::from([10, 20, 30, 40]);
//! let mut cursor = array.begin();
//!
//! cursor += 2;
//! assert_eq!(cursor.get(), Some(&30));
//!
//! let back = cursor - 1;
//! assert_eq!(back.get(), Some(&20));
//!
//! assert_eq!(array.end() - array.begin(), 4);
//! for (position, value) in array.begin().enumerate() {
//!     assert_eq!(array[position], *value);
//! }
//! ```
//!
//! # Failure Reporting
//!
//! Operations come in up to three flavors, from most convenient to most
//! explicit:
//!
//! - Indexing through `array[index]` panics on a position past the length
//! - [`get`](DynArray::get) and [`pop`](DynArray::pop) return `Option` for
//!   absent positions
//! - [`try_get`](DynArray::try_get), [`try_pop`](DynArray::try_pop) and
//!   [`try_reserve`](DynArray::try_reserve) return a [`DynArrayError`] that
//!   names the failed precondition
//!
//! ```
//! use dynarray::{DynArray, DynArrayError};
//!
//! let mut array = DynArray::from([1, 2, 3]);
//!
//! assert_eq!(array.get(9), None);
//! assert_eq!(
//!     array.try_get(9),
//!     Err(DynArrayError::IndexOutOfBounds { index: 9, length: 3 })
//! );
//!
//! array.clear();
//! assert_eq!(array.pop(), None);
//! assert_eq!(array.try_pop(), Err(DynArrayError::EmptyArray));
//! ```
//!
//! # Ordering
//!
//! Arrays compare lexicographically element by element; an all-equal prefix
//! ties on length with the shorter array first.
//!
//! ```
//! use dynarray::dynarray;
//!
//! assert!(dynarray![1, 2, 3] < dynarray![1, 2, 4]);
//! assert!(dynarray![1, 2] < dynarray![1, 2, 0]); // prefix ties break by length
//! assert_eq!(dynarray![5; 2], dynarray![5, 5]);
//! ```
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`: amortized O(1) - a reallocation copies all live elements
//! - `pop()`, `clear()`, `swap()`: O(1)
//! - `get()`, indexing, cursor moves: O(1)
//! - `reserve()`: O(n) when it grows - copies the live elements
//! - Comparison: O(min(len)) - stops at the first unequal element
//!
//! ## Space Complexity
//! - One heap buffer of `capacity()` slots, four bytes per slot
//! - Geometric growth keeps at most half the slots spare after a push
//! - `new()` does not allocate; the first push does
//!
//! ## `no_std` Compatibility
//!
//! This crate is `no_std` compatible: it uses `alloc` for the element buffer
//! and only `core` functionality elsewhere, so it is suitable for embedded
//! and constrained environments with an allocator.
//!
//! Enable the optional `std` feature for use alongside std-only tooling:
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod array;
mod cursor;
mod error;

// Re-export public types and traits
pub use array::DynArray;
pub use cursor::{Cursor, CursorMut};
pub use error::DynArrayError;

/// Creates a [`DynArray`] from its arguments.
///
/// `dynarray![]` is an empty array, `dynarray![value; count]` repeats
/// `value` `count` times and `dynarray![a, b, c]` lists elements front to
/// back, like `vec!`.
///
/// ```
/// use dynarray::{dynarray, DynArray};
///
/// let repeated = dynarray![7; 3];
/// assert_eq!(repeated, DynArray::from([7, 7, 7]));
///
/// let listed = dynarray![1, 2, 3];
/// assert_eq!(listed.as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $count:expr) => {
        $crate::DynArray::from_elem($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynArray::from_slice(&[$($value),+])
    };
}
