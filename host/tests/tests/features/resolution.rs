//! Resolution of advertised feature masks

use blue_st_features::codec::feature_uuid;
use blue_st_features::{
    board_feature_map, classify, default_mask_to_feature_map, BoardId, CharacteristicKind, FeatureKind, FeatureMask,
    FeatureRegistry, FeatureRegistryBuilder, TableSource,
};
use blue_st_host_tests::{init_logging, seeded_rng, DiscoveredCharacteristic};
use rand::Rng;

#[test]
fn board_entries_never_fall_back() {
    let registry = FeatureRegistry::shipped();

    for (board, map) in board_feature_map() {
        for (bit, kinds) in map.iter() {
            assert_eq!(kinds, registry.resolve_bit(*board, bit));

            let resolution = registry.resolve(*board, bit);

            assert_eq!(1, resolution.features().len());
            assert_eq!(TableSource::Board, resolution.features()[0].source);
            assert_eq!(kinds, resolution.features()[0].kinds);
        }
    }
}

#[test]
fn boards_without_entry_use_default() {
    let registry = FeatureRegistry::shipped();

    let boards = (0..=u8::MAX)
        .map(BoardId::new)
        .filter(|board| !board_feature_map().contains_key(board));

    for board in boards {
        for (bit, kinds) in default_mask_to_feature_map().iter() {
            assert_eq!(
                Some((TableSource::Default, kinds)),
                registry.lookup(board, bit),
                "board {}, bit {}",
                board,
                bit
            );
        }
    }
}

#[test]
fn board_entry_and_default_entry_in_one_mask() {
    init_logging();

    let board = BoardId::new(0x42);

    let registry = FeatureRegistryBuilder::new()
        .board_feature(board, FeatureMask::from_bit_index(0), [FeatureKind::Switch])
        .default_feature(FeatureMask::from_bit_index(0), [FeatureKind::Pedometer])
        .default_feature(FeatureMask::from_bit_index(2), [FeatureKind::Led])
        .build()
        .expect("valid registry");

    let resolution = registry.resolve(board, FeatureMask::new(0b0101));

    let features = resolution.features();

    assert_eq!(2, features.len());

    assert_eq!(FeatureMask::from_bit_index(0), features[0].mask);
    assert_eq!(&[FeatureKind::Switch], features[0].kinds);
    assert_eq!(TableSource::Board, features[0].source);

    assert_eq!(FeatureMask::from_bit_index(2), features[1].mask);
    assert_eq!(&[FeatureKind::Led], features[1].kinds);
    assert_eq!(TableSource::Default, features[1].source);

    assert!(resolution.is_complete());
}

#[test]
fn unknown_bits_are_skipped() {
    init_logging();

    let registry = FeatureRegistry::shipped();

    let mut rng = seeded_rng(5);

    for _ in 0..1000 {
        let board = BoardId::new(rng.gen());
        let mask = FeatureMask::new(rng.gen());

        let resolution = registry.resolve(board, mask);

        let mut resolved = FeatureMask::EMPTY;
        let mut previous = None;

        for feature in resolution.features() {
            assert!(!feature.kinds.is_empty());

            // ascending order
            assert!(previous < Some(feature.mask));

            previous = Some(feature.mask);

            resolved |= feature.mask;
        }

        assert_eq!(mask, resolved | resolution.unknown());

        assert_eq!(FeatureMask::EMPTY, resolved & resolution.unknown());

        for bit in resolution.unknown().bits() {
            assert!(registry.resolve_bit(board, bit).is_empty());
        }
    }
}

#[test]
fn discovered_feature_characteristic() {
    init_logging();

    // accelerometer, gyroscope and magnetometer in one characteristic
    let c = DiscoveredCharacteristic::new(feature_uuid(FeatureMask::new(0x00E0_0000)));

    let mask = match classify(&c) {
        CharacteristicKind::Feature(mask) => mask,
        kind => panic!("unexpected characteristic kind {:?}", kind),
    };

    let kinds: Vec<FeatureKind> = FeatureRegistry::shipped()
        .resolve(BoardId::SENSOR_TILE, mask)
        .kinds()
        .collect();

    assert_eq!(
        vec![FeatureKind::Magnetometer, FeatureKind::Gyroscope, FeatureKind::Acceleration],
        kinds
    );
}

#[test]
fn board_specific_layouts_differ() {
    let registry = FeatureRegistry::shipped();

    let bit_6 = FeatureMask::from_bit_index(6);

    assert_eq!(&[FeatureKind::Compass], registry.resolve_bit(BoardId::SENSOR_TILE, bit_6));

    assert_eq!(&[FeatureKind::EventCounter], registry.resolve_bit(BoardId::SENSOR_TILE_BOX, bit_6));

    // only the exact code of the Nucleo entry has the board table
    let bit_11 = FeatureMask::from_bit_index(11);

    assert_eq!(&[FeatureKind::Led], registry.resolve_bit(BoardId::NUCLEO, bit_11));

    assert_eq!(&[FeatureKind::BeamForming], registry.resolve_bit(BoardId::new(0x81), bit_11));
}
