//! Host integration test framework

use blue_st_host_util::{Characteristic, Uuid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A characteristic as it would be discovered by a transport
///
/// The payload is never looked at by the library, it is only here to make the characteristic
/// look like the handle of a real BLE stack.
#[derive(Clone, Debug)]
pub struct DiscoveredCharacteristic {
    uuid: Uuid,
    pub payload: Vec<u8>,
}

impl DiscoveredCharacteristic {
    pub fn new(uuid: Uuid) -> Self {
        DiscoveredCharacteristic {
            uuid,
            payload: Vec::new(),
        }
    }
}

impl Characteristic for DiscoveredCharacteristic {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}

/// Install a logger that writes to the test output
///
/// This can be called by every test, only the first call installs the logger.
pub fn init_logging() {
    let _ = simplelog::TestLogger::init(log::LevelFilter::Trace, simplelog::Config::default());
}

/// Create a random number generator that is the same for every run of a test
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create a random UUID with the low 96 bits of `base`
pub fn random_family_member<R: Rng>(rng: &mut R, base: &Uuid) -> Uuid {
    base.with_most_significant_u32(rng.gen())
}

/// Create `count` random 128 bit UUIDs
pub fn random_uuids<R: Rng>(rng: &mut R, count: usize) -> Vec<Uuid> {
    (0..count).map(|_| Uuid::from_u128(rng.gen())).collect()
}

/// UUIDs of well known profiles defined by the Bluetooth SIG
pub const THIRD_PARTY_UUIDS: &[Uuid] = &[
    // Heart Rate Measurement
    Uuid::from_u16(0x2A37),
    // Battery Level
    Uuid::from_u16(0x2A19),
    // Device Name
    Uuid::from_u16(0x2A00),
    // Nordic UART RX
    Uuid::from_u128(0x6e400002_b5a3_f393_e0a9_e50e24dcca9e),
    // Nordic UART TX
    Uuid::from_u128(0x6e400003_b5a3_f393_e0a9_e50e24dcca9e),
];
