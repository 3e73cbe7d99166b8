//! The UUIDs of the debug and configuration services

use blue_st_host_tests::{random_uuids, seeded_rng, THIRD_PARTY_UUIDS};
use blue_st_host_util::Uuid;
use blue_st_services::{config_service, debug_service, is_debug_characteristic, is_sdk_service};

#[test]
fn published_uuids() {
    let expected = [
        (debug_service().service_uuid(), "00000000-000e-11e1-9ab4-0002a5d5c51b"),
        (debug_service().term_uuid(), "00000001-000e-11e1-ac36-0002a5d5c51b"),
        (debug_service().std_err_uuid(), "00000002-000e-11e1-ac36-0002a5d5c51b"),
        (config_service().service_uuid(), "00000000-000f-11e1-9ab4-0002a5d5c51b"),
        (config_service().config_control_uuid(), "00000001-000f-11e1-ac36-0002a5d5c51b"),
        (config_service().feature_command_uuid(), "00000002-000f-11e1-ac36-0002a5d5c51b"),
    ];

    for (uuid, text) in expected {
        assert_eq!(Ok(uuid), Uuid::try_from(text));

        assert_eq!(text, uuid.to_string());
    }
}

#[test]
fn debug_characteristics_are_exact_matches() {
    let mut rng = seeded_rng(6);

    for uuid in random_uuids(&mut rng, 1000).iter().chain(THIRD_PARTY_UUIDS) {
        assert!(!is_debug_characteristic(uuid), "{}", uuid);

        assert!(!is_sdk_service(uuid), "{}", uuid);
    }

    // same suffix, different characteristic
    let unknown_debug = debug_service().term_uuid().with_most_significant_u32(3);

    assert!(!is_debug_characteristic(&unknown_debug));
}
