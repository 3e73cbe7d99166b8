//! Recognition of BlueST characteristics and resolution of their features
//!
//! A BlueST node exports its sensor data through *feature characteristics*. The UUID of such a
//! characteristic contains the [`FeatureMask`] of the features whose data is within the payload
//! of the characteristic. This library determines
//!
//! * what kind of BlueST characteristic a discovered characteristic is (see [`classify`]), and
//! * which handlers are needed to decode its payload (see [`FeatureRegistry`]).
//!
//! Nothing within this library performs any I/O. Discovery of the characteristics, reading and
//! notifications are done by the transport, the decoding of a payload is done by the handlers
//! created through a [`FeatureFactory`].
//!
//! ```
//! use blue_st_features::{classify, BoardId, CharacteristicKind, FeatureKind, FeatureRegistry, Uuid};
//!
//! // the temperature and pressure characteristic of a SensorTile
//! let uuid = Uuid::try_from("00140000-0001-11e1-ac36-0002a5d5c51b").unwrap();
//!
//! if let CharacteristicKind::Feature(mask) = classify(&uuid) {
//!     let resolution = FeatureRegistry::shipped().resolve(BoardId::SENSOR_TILE, mask);
//!
//!     assert_eq!(
//!         vec![FeatureKind::Temperature, FeatureKind::Pressure],
//!         resolution.kinds().collect::<Vec<_>>()
//!     );
//! }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod board;
mod catalog;
pub mod characteristics;
pub mod codec;
mod factory;
mod kind;
mod mask;
pub mod registry;

pub use blue_st_host_util::{Characteristic, Uuid};
pub use board::{BoardId, BoardType};
pub use characteristics::{classify, CharacteristicKind};
pub use codec::{extract_feature_mask, feature_mask_of};
pub use factory::FeatureFactory;
pub use kind::FeatureKind;
pub use mask::{Bits, FeatureMask};
pub use registry::{
    board_feature_map, default_mask_to_feature_map, CatalogError, CatalogTable, FeatureMap, FeatureRegistry,
    FeatureRegistryBuilder, Resolution, ResolvedFeature, TableSource,
};
