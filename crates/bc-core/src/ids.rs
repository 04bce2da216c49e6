//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are dense and 1-based: a population of `n` riders uses `RiderId(1)`
//! through `RiderId(n)`.  The raw value `0` is reserved for "nobody", which is
//! what an empty waiting-line slot or an empty car seat holds.  Use
//! [`RiderId::index`] to turn an id into a zero-based `Vec` index.

use std::fmt;

/// Generate a typed 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "nobody", raw value `0`.
            pub const NONE: $name = $name(0);

            #[inline(always)]
            pub fn is_none(self) -> bool {
                self.0 == 0
            }

            #[inline(always)]
            pub fn is_some(self) -> bool {
                self.0 != 0
            }

            /// Zero-based position of this id in a per-actor `Vec`.
            ///
            /// # Panics
            /// Panics if called on [`Self::NONE`].
            #[inline(always)]
            pub fn index(self) -> usize {
                assert!(self.is_some(), concat!("index() on ", stringify!($name), "::NONE"));
                (self.0 - 1) as usize
            }

            /// Inverse of [`index`](Self::index).
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as $inner + 1)
            }

            /// `None` for the sentinel, `Some(self)` otherwise.
            #[inline(always)]
            pub fn some(self) -> Option<Self> {
                if self.is_none() { None } else { Some(self) }
            }

            /// Every id of a population of `count`, in ascending order.
            pub fn all(count: usize) -> impl Iterator<Item = $name> {
                (0..count).map($name::from_index)
            }
        }

        impl Default for $name {
            /// Returns the `NONE` sentinel so unassigned ids are visibly empty.
            #[inline(always)]
            fn default() -> Self {
                Self::NONE
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Identity of a park visitor.
    pub struct RiderId(u32);
}

typed_id! {
    /// Identity of a bumper car.
    pub struct CarId(u32);
}
