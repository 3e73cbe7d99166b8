//! The feature mask

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of features exported by a node
///
/// Every bit of the mask is one feature. Within the advertisement of a board each feature uses
/// exactly one bit, but which bit is used for a feature depends on the board type (see
/// [`FeatureRegistry`]).
///
/// A single bit `FeatureMask` is used as the key of the feature tables.
///
/// [`FeatureRegistry`]: crate::FeatureRegistry
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct FeatureMask(u32);

impl FeatureMask {
    /// A mask without any feature
    pub const EMPTY: FeatureMask = FeatureMask(0);

    pub const fn new(mask: u32) -> Self {
        FeatureMask(mask)
    }

    /// Create a mask with only the bit at `index`
    ///
    /// An index greater than 31 creates an empty mask.
    pub const fn from_bit_index(index: u8) -> Self {
        match 1u32.checked_shl(index as u32) {
            Some(bit) => FeatureMask(bit),
            None => FeatureMask::EMPTY,
        }
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every bit of `other` is also within `self`
    pub const fn contains(&self, other: FeatureMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_single_bit(&self) -> bool {
        self.0.is_power_of_two()
    }

    /// Get the index of the bit of a single bit mask
    ///
    /// `None` is returned if the mask is empty or has more than one bit set.
    pub const fn bit_index(&self) -> Option<u8> {
        if self.is_single_bit() {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// The number of features within the mask
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the bits of the mask
    ///
    /// Every item is a single bit mask. Bits are returned in ascending order of their index.
    pub fn bits(&self) -> Bits {
        Bits(self.0)
    }
}

impl fmt::Debug for FeatureMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FeatureMask({:#010x})", self.0)
    }
}

impl fmt::Display for FeatureMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::LowerHex for FeatureMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u32> for FeatureMask {
    fn from(mask: u32) -> Self {
        FeatureMask(mask)
    }
}

impl From<FeatureMask> for u32 {
    fn from(mask: FeatureMask) -> u32 {
        mask.0
    }
}

impl BitOr for FeatureMask {
    type Output = FeatureMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        FeatureMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for FeatureMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl BitAnd for FeatureMask {
    type Output = FeatureMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        FeatureMask(self.0 & rhs.0)
    }
}

/// Iterator over the bits of a [`FeatureMask`]
///
/// This is created by the method [`bits`](FeatureMask::bits).
#[derive(Clone, Debug)]
pub struct Bits(u32);

impl Iterator for Bits {
    type Item = FeatureMask;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let lowest = self.0 & self.0.wrapping_neg();

        self.0 &= !lowest;

        Some(FeatureMask(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;

        (len, Some(len))
    }
}

impl ExactSizeIterator for Bits {}

impl core::iter::FusedIterator for Bits {}
