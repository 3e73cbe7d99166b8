//! Recognition of BlueST characteristics
//!
//! The BlueST protocol uses families of 128 bit UUIDs. The members of a family share the low 96
//! bits of the UUID, the first 32 bits are different for every member.
//!
//! | family           | UUID                                   | first 32 bits       |
//! |------------------|----------------------------------------|---------------------|
//! | feature          | `xxxxxxxx-0001-11e1-ac36-0002a5d5c51b` | feature mask        |
//! | extended feature | `xxxxxxxx-0002-11e1-ac36-0002a5d5c51b` | extended feature id |
//! | general purpose  | `xxxxxxxx-0003-11e1-ac36-0002a5d5c51b` | general purpose id  |
//!
//! The debug and configuration characteristics are single UUIDs, see [`blue_st_services`].
//!
//! A characteristic belongs to at most one family. Characteristics of other GATT profiles are
//! not within any family, every test of this module is false for them.

use crate::kind::FeatureKind;
use crate::mask::FeatureMask;
use crate::registry::FeatureRegistry;
use blue_st_host_util::{Characteristic, Uuid};
use blue_st_services::{ConfigCharacteristic, DebugCharacteristic};

/// Base UUID of the feature characteristics
pub const FEATURE_BASE: Uuid = Uuid::from_u128(0x00000000_0001_11e1_ac36_0002a5d5c51b);

/// Base UUID of the extended feature characteristics
pub const EXTENDED_FEATURE_BASE: Uuid = Uuid::from_u128(0x00000000_0002_11e1_ac36_0002a5d5c51b);

/// Base UUID of the general purpose feature characteristics
pub const GENERAL_PURPOSE_FEATURE_BASE: Uuid = Uuid::from_u128(0x00000000_0003_11e1_ac36_0002a5d5c51b);

/// Check if `c` is a feature characteristic
pub fn is_feature_characteristic<C: Characteristic>(c: &C) -> bool {
    c.uuid().matches_suffix(&FEATURE_BASE)
}

/// Check if `c` is an extended feature characteristic
pub fn is_extended_feature_characteristic<C: Characteristic>(c: &C) -> bool {
    c.uuid().matches_suffix(&EXTENDED_FEATURE_BASE)
}

/// Check if `c` is a general purpose feature characteristic
///
/// The format of the data of a general purpose characteristic is not known by the library, it is
/// described by the node at runtime.
pub fn is_general_purpose_feature_characteristic<C: Characteristic>(c: &C) -> bool {
    c.uuid().matches_suffix(&GENERAL_PURPOSE_FEATURE_BASE)
}

/// Get the handler kinds of an extended feature characteristic
///
/// This uses the [shipped](FeatureRegistry::shipped) registry, see
/// [`FeatureRegistry::extended_features`].
pub fn get_extended_feature_classes<C: Characteristic>(c: &C) -> &'static [FeatureKind] {
    FeatureRegistry::shipped().extended_features(c)
}

pub use blue_st_services::{
    is_config_characteristic, is_config_control_characteristic, is_config_feature_command_characteristic,
    is_debug_characteristic,
};

/// The category of a characteristic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacteristicKind {
    /// A feature characteristic and the features it exports
    Feature(FeatureMask),
    /// An extended feature characteristic and its extended feature id
    ExtendedFeature(u32),
    /// A general purpose feature characteristic and its id
    GeneralPurpose(u32),
    Debug(DebugCharacteristic),
    Config(ConfigCharacteristic),
    /// A characteristic not defined by BlueST
    Foreign,
}

impl CharacteristicKind {
    /// Check if this is a characteristic defined by BlueST
    pub fn is_sdk_characteristic(&self) -> bool {
        *self != CharacteristicKind::Foreign
    }
}

/// Classify a characteristic
///
/// ```
/// use blue_st_features::{classify, CharacteristicKind, FeatureMask, Uuid};
///
/// let accelerometer = Uuid::try_from("00800000-0001-11e1-ac36-0002a5d5c51b").unwrap();
///
/// assert_eq!(CharacteristicKind::Feature(FeatureMask::new(0x0080_0000)), classify(&accelerometer));
///
/// // Battery Level
/// assert_eq!(CharacteristicKind::Foreign, classify(&Uuid::from_u16(0x2A19)));
/// ```
pub fn classify<C: Characteristic>(c: &C) -> CharacteristicKind {
    let uuid = c.uuid();

    let kind = if is_feature_characteristic(&uuid) {
        CharacteristicKind::Feature(crate::codec::extract_feature_mask(&uuid))
    } else if is_extended_feature_characteristic(&uuid) {
        CharacteristicKind::ExtendedFeature(uuid.most_significant_u32())
    } else if is_general_purpose_feature_characteristic(&uuid) {
        CharacteristicKind::GeneralPurpose(uuid.most_significant_u32())
    } else if let Some(debug) = DebugCharacteristic::from_uuid(&uuid) {
        CharacteristicKind::Debug(debug)
    } else if let Some(config) = ConfigCharacteristic::from_uuid(&uuid) {
        CharacteristicKind::Config(config)
    } else {
        CharacteristicKind::Foreign
    };

    log::trace!("(BlueST) characteristic {} is {:?}", uuid, kind);

    kind
}

/// Create the UUID of an extended feature characteristic
pub const fn extended_feature_uuid(id: u32) -> Uuid {
    EXTENDED_FEATURE_BASE.with_most_significant_u32(id)
}

/// Create the UUID of a general purpose feature characteristic
pub const fn general_purpose_feature_uuid(id: u32) -> Uuid {
    GENERAL_PURPOSE_FEATURE_BASE.with_most_significant_u32(id)
}
