//! A BlueST Library
//!
//! BlueST is the protocol used by the ST sensor nodes to export their sensor data over Bluetooth
//! Low Energy. This library is the layer between the BLE stack of the application and the
//! handlers of the sensor data. It recognizes the characteristics of a node and tells which
//! handlers decode their payload. It does not perform any Bluetooth operation itself.
//!
//! The library is split into the following crates, re-exported here behind cargo features.
//!
//! * [`services`]: the UUIDs of the debug and configuration services
//! * [`features`]: the feature mask, characteristic classification and the board feature
//!   registry

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "services")]
#[doc(inline)]
pub use blue_st_services as services;

#[cfg(feature = "features")]
#[doc(inline)]
pub use blue_st_features as features;

pub use blue_st_host_util::{Characteristic, Uuid, UuidFormatError};
