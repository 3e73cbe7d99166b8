//! Feature mask encoding within a characteristic UUID
//!
//! The first 32 bits of a feature characteristic UUID are the mask of the features exported
//! through the characteristic. A characteristic with more than one bit set carries the data of
//! every one of its features within the same payload.

use crate::characteristics::{is_feature_characteristic, FEATURE_BASE};
use crate::mask::FeatureMask;
use blue_st_host_util::{Characteristic, Uuid};

/// Extract the feature mask from the UUID of a feature characteristic
///
/// This does not check that `uuid` is the UUID of a feature characteristic. For any other UUID
/// the returned mask is meaningless (see [`feature_mask_of`]).
pub fn extract_feature_mask(uuid: &Uuid) -> FeatureMask {
    FeatureMask::new(uuid.most_significant_u32())
}

/// Get the feature mask of a characteristic
///
/// An empty mask is returned if `c` is not a feature characteristic.
pub fn feature_mask_of<C: Characteristic>(c: &C) -> FeatureMask {
    if is_feature_characteristic(c) {
        extract_feature_mask(&c.uuid())
    } else {
        FeatureMask::EMPTY
    }
}

/// Create the UUID of the feature characteristic for `mask`
pub const fn feature_uuid(mask: FeatureMask) -> Uuid {
    FEATURE_BASE.with_most_significant_u32(mask.get())
}
