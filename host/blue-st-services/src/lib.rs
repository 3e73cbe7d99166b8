//! The BlueST debug and configuration services
//!
//! A BlueST node always exposes two services next to its feature characteristics. The *debug*
//! service carries a text terminal and an error stream, the *config* service is used for
//! register access and for sending commands to a feature. The UUIDs of these services and their
//! characteristics are fixed by the protocol and never change at runtime.
//!
//! ```
//! use blue_st_services::{config_service, debug_service, ConfigCharacteristic};
//!
//! assert!(debug_service().is_debug_characteristic(&debug_service().std_err_uuid()));
//!
//! let command = config_service().feature_command_uuid();
//!
//! assert_eq!(Some(ConfigCharacteristic::FeatureCommand), ConfigCharacteristic::from_uuid(&command));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod debug;

pub use blue_st_host_util::{Characteristic, Uuid};
pub use config::{
    config_service, is_config_characteristic, is_config_control_characteristic,
    is_config_feature_command_characteristic, ConfigCharacteristic, ConfigService,
};
pub use debug::{debug_service, is_debug_characteristic, DebugCharacteristic, DebugService};

/// The low 80 bits of the UUIDs of the BlueST services
///
/// A service UUID is `00000000-yyyy-11e1-9ab4-0002a5d5c51b` where `yyyy` selects the service.
const SERVICE_BASE: u128 = 0x0000_0000_0000_11e1_9ab4_0002a5d5c51b;

/// The low 80 bits of the UUIDs of the characteristics within the BlueST services
///
/// A characteristic UUID is `xxxxxxxx-yyyy-11e1-ac36-0002a5d5c51b` where `yyyy` is the service
/// and `xxxxxxxx` selects the characteristic within it. This is the same tail as the feature
/// characteristics, not the tail of the service UUID.
const CHARACTERISTIC_BASE: u128 = 0x0000_0000_0000_11e1_ac36_0002a5d5c51b;

const fn service_uuid(service: u16) -> Uuid {
    Uuid::from_u128(((service as u128) << 80) | SERVICE_BASE)
}

const fn characteristic_uuid(service: u16, characteristic: u32) -> Uuid {
    Uuid::from_u128(((characteristic as u128) << 96) | ((service as u128) << 80) | CHARACTERISTIC_BASE)
}

/// Check if `uuid` is the UUID of one of the services defined by BlueST
pub fn is_sdk_service(uuid: &Uuid) -> bool {
    *uuid == DebugService::SERVICE || *uuid == ConfigService::SERVICE
}
