//! The debug service
//!
//! The node writes its output messages to the terminal characteristic and its error messages to
//! the stderr characteristic. The terminal characteristic is also written by the client to send
//! text to the node.

use crate::{characteristic_uuid, service_uuid};
use blue_st_host_util::{Characteristic, Uuid};

/// The debug service and its characteristics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugService;

impl DebugService {
    /// UUID of the debug service
    pub const SERVICE: Uuid = service_uuid(0x000E);

    /// UUID of the terminal characteristic
    pub const TERM: Uuid = characteristic_uuid(0x000E, 1);

    /// UUID of the characteristic where the node notifies error messages
    pub const STDERR: Uuid = characteristic_uuid(0x000E, 2);

    pub fn service_uuid(&self) -> Uuid {
        Self::SERVICE
    }

    pub fn std_err_uuid(&self) -> Uuid {
        Self::STDERR
    }

    pub fn term_uuid(&self) -> Uuid {
        Self::TERM
    }

    /// Check if `c` is the terminal or the stderr characteristic
    pub fn is_debug_characteristic<C: Characteristic>(&self, c: &C) -> bool {
        DebugCharacteristic::from_uuid(&c.uuid()).is_some()
    }
}

/// Get the debug service
pub fn debug_service() -> DebugService {
    DebugService
}

/// Check if `c` is a characteristic of the debug service
pub fn is_debug_characteristic<C: Characteristic>(c: &C) -> bool {
    DebugService.is_debug_characteristic(c)
}

/// The characteristics of the debug service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DebugCharacteristic {
    Terminal,
    StdErr,
}

impl DebugCharacteristic {
    pub fn from_uuid(uuid: &Uuid) -> Option<Self> {
        match *uuid {
            DebugService::TERM => Some(DebugCharacteristic::Terminal),
            DebugService::STDERR => Some(DebugCharacteristic::StdErr),
            _ => None,
        }
    }

    pub fn uuid(&self) -> Uuid {
        match self {
            DebugCharacteristic::Terminal => DebugService::TERM,
            DebugCharacteristic::StdErr => DebugService::STDERR,
        }
    }
}
