//! The feature catalog shipped with the library
//!
//! These tables are the source of the shipped [`FeatureRegistry`](crate::FeatureRegistry). They
//! are checked while compiling, a malformed table fails the build.

use crate::board::BoardId;
use crate::kind::FeatureKind::{self, *};

/// A table of `(key, handler kinds)` pairs
pub(crate) type StaticTable = &'static [(u32, &'static [FeatureKind])];

/// Bit layout of the advertised feature mask used when the board has no specific entry
pub(crate) const DEFAULT_FEATURES: StaticTable = &[
    (1 << 0, &[Pedometer]),
    (1 << 1, &[MemsGesture]),
    (1 << 2, &[ProximityGesture]),
    (1 << 3, &[CarryPosition]),
    (1 << 4, &[Activity]),
    (1 << 5, &[MotionIntensity]),
    (1 << 6, &[Compass]),
    (1 << 7, &[SensorFusion]),
    (1 << 8, &[SensorFusionCompact]),
    (1 << 9, &[FreeFall]),
    (1 << 10, &[AccelerometerEvent]),
    (1 << 11, &[BeamForming]),
    (1 << 12, &[SdLogging]),
    // bits 13 and 14 are reserved
    (1 << 15, &[CoSensor]),
    (1 << 16, &[SecondaryTemperature]),
    (1 << 17, &[Battery]),
    (1 << 18, &[Temperature]),
    (1 << 19, &[Humidity]),
    (1 << 20, &[Pressure]),
    (1 << 21, &[Magnetometer]),
    (1 << 22, &[Gyroscope]),
    (1 << 23, &[Acceleration]),
    (1 << 24, &[Luminosity]),
    (1 << 25, &[Proximity]),
    (1 << 26, &[MicLevel]),
    (1 << 27, &[AudioAdpcm]),
    (1 << 28, &[DirectionOfArrival]),
    (1 << 29, &[Switch]),
    (1 << 30, &[AudioAdpcmSync]),
    // bit 31 is reserved
];

const STEVAL_WESU1_FEATURES: StaticTable = &[(1 << 2, &[AccelerometerEvent]), (1 << 3, &[FreeFall])];

const SENSOR_TILE_BOX_FEATURES: StaticTable = &[(1 << 6, &[EventCounter]), (1 << 14, &[Qvar])];

const NUCLEO_FEATURES: StaticTable = &[(1 << 11, &[Led])];

/// Board specific bits, these take precedence over [`DEFAULT_FEATURES`]
pub(crate) const BOARD_FEATURES: &[(BoardId, StaticTable)] = &[
    (BoardId::STEVAL_WESU1, STEVAL_WESU1_FEATURES),
    (BoardId::SENSOR_TILE_BOX, SENSOR_TILE_BOX_FEATURES),
    (BoardId::NUCLEO, NUCLEO_FEATURES),
];

/// Handlers of the extended feature characteristics, keyed by the extended feature id
///
/// The order of the handlers is the order they consume the payload of the characteristic.
pub(crate) const EXTENDED_FEATURES: StaticTable = &[
    (0x01, &[AudioOpus]),
    (0x02, &[AudioOpusConf]),
    (0x03, &[AudioClassification]),
    (0x04, &[AiLogging]),
    (0x05, &[EventCounter]),
    (0x06, &[MotionAlgorithm]),
    (0x07, &[FitnessActivity]),
    (
        0x0D,
        &[PredictiveSpeedStatus, PredictiveAccelerationStatus, PredictiveFrequencyDomainStatus],
    ),
];

/// Check that the keys of `table` are unique, that every entry has at least one handler and
/// (when `single_bit_keys` is true) that every key is a single bit.
pub(crate) const fn is_well_formed(table: StaticTable, single_bit_keys: bool) -> bool {
    let mut i = 0;

    while i < table.len() {
        let (key, kinds) = table[i];

        if kinds.is_empty() || (single_bit_keys && !key.is_power_of_two()) {
            return false;
        }

        let mut j = i + 1;

        while j < table.len() {
            if table[j].0 == key {
                return false;
            }

            j += 1;
        }

        i += 1;
    }

    true
}

const fn boards_are_well_formed(boards: &[(BoardId, StaticTable)]) -> bool {
    let mut i = 0;

    while i < boards.len() {
        if !is_well_formed(boards[i].1, true) {
            return false;
        }

        let mut j = i + 1;

        while j < boards.len() {
            if boards[j].0.get() == boards[i].0.get() {
                return false;
            }

            j += 1;
        }

        i += 1;
    }

    true
}

const _: () = assert!(is_well_formed(DEFAULT_FEATURES, true), "malformed default feature table");

const _: () = assert!(boards_are_well_formed(BOARD_FEATURES), "malformed board feature table");

const _: () = assert!(is_well_formed(EXTENDED_FEATURES, false), "malformed extended feature table");
