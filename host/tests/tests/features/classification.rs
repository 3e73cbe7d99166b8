//! Classification of discovered characteristics

use blue_st_features::characteristics::{
    extended_feature_uuid, get_extended_feature_classes, is_config_characteristic, is_config_control_characteristic,
    is_config_feature_command_characteristic, is_debug_characteristic, is_extended_feature_characteristic,
    is_feature_characteristic, is_general_purpose_feature_characteristic, EXTENDED_FEATURE_BASE, FEATURE_BASE,
    GENERAL_PURPOSE_FEATURE_BASE,
};
use blue_st_features::{classify, extract_feature_mask, feature_mask_of, CharacteristicKind, FeatureKind, FeatureMask};
use blue_st_host_tests::{
    init_logging, random_family_member, random_uuids, seeded_rng, DiscoveredCharacteristic, THIRD_PARTY_UUIDS,
};
use blue_st_host_util::{Characteristic, Uuid};
use blue_st_services::{ConfigCharacteristic, ConfigService, DebugCharacteristic, DebugService};

const ITERATIONS: usize = 1000;

#[test]
fn feature_family_is_exclusive() {
    init_logging();

    let mut rng = seeded_rng(1);

    for _ in 0..ITERATIONS {
        let c = DiscoveredCharacteristic::new(random_family_member(&mut rng, &FEATURE_BASE));

        assert!(is_feature_characteristic(&c), "{:?}", c);
        assert!(!is_general_purpose_feature_characteristic(&c), "{:?}", c);
        assert!(!is_extended_feature_characteristic(&c), "{:?}", c);
        assert!(!is_debug_characteristic(&c), "{:?}", c);
        assert!(!is_config_characteristic(&c), "{:?}", c);

        assert_eq!(CharacteristicKind::Feature(feature_mask_of(&c)), classify(&c));
    }
}

#[test]
fn general_purpose_and_extended_families_are_exclusive() {
    let mut rng = seeded_rng(2);

    for _ in 0..ITERATIONS {
        let general_purpose = random_family_member(&mut rng, &GENERAL_PURPOSE_FEATURE_BASE);
        let extended = random_family_member(&mut rng, &EXTENDED_FEATURE_BASE);

        assert!(is_general_purpose_feature_characteristic(&general_purpose));
        assert!(!is_feature_characteristic(&general_purpose));
        assert!(!is_extended_feature_characteristic(&general_purpose));
        assert!(!is_debug_characteristic(&general_purpose));
        assert!(!is_config_characteristic(&general_purpose));
        assert!(get_extended_feature_classes(&general_purpose).is_empty());

        assert!(is_extended_feature_characteristic(&extended));
        assert!(!is_feature_characteristic(&extended));
        assert!(!is_general_purpose_feature_characteristic(&extended));
        assert!(!is_debug_characteristic(&extended));
        assert!(!is_config_characteristic(&extended));
    }
}

#[test]
fn extract_feature_mask_is_deterministic() {
    let mut rng = seeded_rng(3);

    for uuid in random_uuids(&mut rng, ITERATIONS) {
        assert_eq!(extract_feature_mask(&uuid), extract_feature_mask(&uuid));

        assert_eq!(uuid.most_significant_u32(), extract_feature_mask(&uuid).get());
    }
}

#[test]
fn config_is_control_or_command() {
    let mut rng = seeded_rng(4);

    let mut uuids = random_uuids(&mut rng, ITERATIONS);

    uuids.extend_from_slice(&[
        ConfigService::SERVICE,
        ConfigService::CONFIG_CONTROL,
        ConfigService::FEATURE_COMMAND,
        DebugService::TERM,
        DebugService::STDERR,
    ]);

    for uuid in uuids.iter() {
        let control = is_config_control_characteristic(uuid);
        let command = is_config_feature_command_characteristic(uuid);

        assert_eq!(is_config_characteristic(uuid), control || command, "{}", uuid);

        assert!(!(control && command), "{}", uuid);
    }
}

#[test]
fn service_characteristics() {
    init_logging();

    let expected = [
        (DebugService::TERM, CharacteristicKind::Debug(DebugCharacteristic::Terminal)),
        (DebugService::STDERR, CharacteristicKind::Debug(DebugCharacteristic::StdErr)),
        (ConfigService::CONFIG_CONTROL, CharacteristicKind::Config(ConfigCharacteristic::Control)),
        (ConfigService::FEATURE_COMMAND, CharacteristicKind::Config(ConfigCharacteristic::FeatureCommand)),
    ];

    for (uuid, kind) in expected {
        let c = DiscoveredCharacteristic::new(uuid);

        assert_eq!(kind, classify(&c));

        assert!(!is_feature_characteristic(&c));
        assert!(!is_general_purpose_feature_characteristic(&c));
        assert_eq!(FeatureMask::EMPTY, feature_mask_of(&c));
    }
}

#[test]
fn third_party_characteristics_are_foreign() {
    init_logging();

    for uuid in THIRD_PARTY_UUIDS {
        let c = DiscoveredCharacteristic::new(*uuid);

        assert!(!is_feature_characteristic(&c), "{}", uuid);
        assert!(!is_general_purpose_feature_characteristic(&c), "{}", uuid);
        assert!(!is_extended_feature_characteristic(&c), "{}", uuid);
        assert!(!is_debug_characteristic(&c), "{}", uuid);
        assert!(!is_config_characteristic(&c), "{}", uuid);
        assert!(get_extended_feature_classes(&c).is_empty(), "{}", uuid);
        assert_eq!(FeatureMask::EMPTY, feature_mask_of(&c), "{}", uuid);
        assert_eq!(CharacteristicKind::Foreign, classify(&c), "{}", uuid);
    }
}

#[test]
fn stacked_extended_feature_keeps_catalog_order() {
    let c = DiscoveredCharacteristic::new(
        Uuid::try_from("0000000d-0002-11e1-ac36-0002a5d5c51b").expect("valid uuid"),
    );

    assert_eq!(CharacteristicKind::ExtendedFeature(0x0D), classify(&c));

    // not the alphabetical order
    assert_eq!(
        &[
            FeatureKind::PredictiveSpeedStatus,
            FeatureKind::PredictiveAccelerationStatus,
            FeatureKind::PredictiveFrequencyDomainStatus,
        ],
        get_extended_feature_classes(&c)
    );

    assert_eq!(extended_feature_uuid(0x0D), c.uuid());
}
