//! The configuration service
//!
//! The config control characteristic gives access to the registers of the node. The feature
//! command characteristic is used to send a command to a specific feature and to receive its
//! response.

use crate::{characteristic_uuid, service_uuid};
use blue_st_host_util::{Characteristic, Uuid};

/// The configuration service and its characteristics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigService;

impl ConfigService {
    /// UUID of the configuration service
    pub const SERVICE: Uuid = service_uuid(0x000F);

    /// UUID of the config control (register access) characteristic
    pub const CONFIG_CONTROL: Uuid = characteristic_uuid(0x000F, 1);

    /// UUID of the feature command characteristic
    pub const FEATURE_COMMAND: Uuid = characteristic_uuid(0x000F, 2);

    pub fn service_uuid(&self) -> Uuid {
        Self::SERVICE
    }

    pub fn config_control_uuid(&self) -> Uuid {
        Self::CONFIG_CONTROL
    }

    pub fn feature_command_uuid(&self) -> Uuid {
        Self::FEATURE_COMMAND
    }

    /// Check if `c` is either the config control or the feature command characteristic
    pub fn is_config_characteristic<C: Characteristic>(&self, c: &C) -> bool {
        ConfigCharacteristic::from_uuid(&c.uuid()).is_some()
    }

    pub fn is_config_control_characteristic<C: Characteristic>(&self, c: &C) -> bool {
        c.uuid() == Self::CONFIG_CONTROL
    }

    pub fn is_config_feature_command_characteristic<C: Characteristic>(&self, c: &C) -> bool {
        c.uuid() == Self::FEATURE_COMMAND
    }
}

/// Get the configuration service
pub fn config_service() -> ConfigService {
    ConfigService
}

pub fn is_config_characteristic<C: Characteristic>(c: &C) -> bool {
    ConfigService.is_config_characteristic(c)
}

pub fn is_config_control_characteristic<C: Characteristic>(c: &C) -> bool {
    ConfigService.is_config_control_characteristic(c)
}

pub fn is_config_feature_command_characteristic<C: Characteristic>(c: &C) -> bool {
    ConfigService.is_config_feature_command_characteristic(c)
}

/// The characteristics of the configuration service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigCharacteristic {
    Control,
    FeatureCommand,
}

impl ConfigCharacteristic {
    pub fn from_uuid(uuid: &Uuid) -> Option<Self> {
        match *uuid {
            ConfigService::CONFIG_CONTROL => Some(ConfigCharacteristic::Control),
            ConfigService::FEATURE_COMMAND => Some(ConfigCharacteristic::FeatureCommand),
            _ => None,
        }
    }

    pub fn uuid(&self) -> Uuid {
        match self {
            ConfigCharacteristic::Control => ConfigService::CONFIG_CONTROL,
            ConfigCharacteristic::FeatureCommand => ConfigService::FEATURE_COMMAND,
        }
    }
}
