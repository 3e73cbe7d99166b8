//! Creation of feature handlers through a factory

use blue_st_features::characteristics::extended_feature_uuid;
use blue_st_features::{BoardId, FeatureFactory, FeatureKind, FeatureMask, FeatureRegistry};
use blue_st_host_tests::{init_logging, DiscoveredCharacteristic};
use std::cell::RefCell;

/// A handler that only remembers what it is
#[derive(Debug, PartialEq)]
struct Handler {
    kind: FeatureKind,
}

/// A factory of an application that only has handlers for inertial sensors
#[derive(Default)]
struct InertialFactory {
    requested: RefCell<Vec<FeatureKind>>,
}

impl FeatureFactory for InertialFactory {
    type Feature = Handler;

    fn create(&self, kind: FeatureKind) -> Option<Handler> {
        self.requested.borrow_mut().push(kind);

        match kind {
            FeatureKind::Acceleration | FeatureKind::Gyroscope | FeatureKind::Magnetometer => Some(Handler { kind }),
            _ => None,
        }
    }
}

#[test]
fn declined_kinds_are_skipped() {
    init_logging();

    let factory = InertialFactory::default();

    // battery, gyroscope and accelerometer
    let handlers = FeatureRegistry::shipped().build_features(
        BoardId::BLUE_COIN,
        FeatureMask::new((1 << 17) | (1 << 22) | (1 << 23)),
        &factory,
    );

    assert_eq!(
        vec![
            Handler {
                kind: FeatureKind::Gyroscope
            },
            Handler {
                kind: FeatureKind::Acceleration
            }
        ],
        handlers
    );

    assert_eq!(
        vec![FeatureKind::Battery, FeatureKind::Gyroscope, FeatureKind::Acceleration],
        *factory.requested.borrow()
    );
}

#[test]
fn unknown_bits_never_reach_the_factory() {
    let factory = InertialFactory::default();

    let handlers = FeatureRegistry::shipped().build_features(BoardId::GENERIC, FeatureMask::new(1 << 31), &factory);

    assert!(handlers.is_empty());

    assert!(factory.requested.borrow().is_empty());
}

#[test]
fn extended_handlers_in_catalog_order() {
    let c = DiscoveredCharacteristic::new(extended_feature_uuid(0x0D));

    let handlers = FeatureRegistry::shipped().build_extended_features(&c, &|kind: FeatureKind| Some(Handler { kind }));

    let kinds: Vec<FeatureKind> = handlers.iter().map(|h| h.kind).collect();

    assert_eq!(
        vec![
            FeatureKind::PredictiveSpeedStatus,
            FeatureKind::PredictiveAccelerationStatus,
            FeatureKind::PredictiveFrequencyDomainStatus,
        ],
        kinds
    );
}
