//! Board identity

use core::fmt;

/// The device type code advertised by a node
///
/// The code is part of the manufacturer data of the advertisement and is supplied by the
/// transport when the node is identified. It selects the board specific feature layout within a
/// [`FeatureRegistry`](crate::FeatureRegistry). Codes with bit 7 set identify a Nucleo board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct BoardId(u8);

impl BoardId {
    pub const GENERIC: BoardId = BoardId(0x00);
    pub const STEVAL_WESU1: BoardId = BoardId(0x01);
    pub const SENSOR_TILE: BoardId = BoardId(0x02);
    pub const BLUE_COIN: BoardId = BoardId(0x03);
    pub const STEVAL_IDB008VX: BoardId = BoardId(0x04);
    pub const STEVAL_BCN002V1: BoardId = BoardId(0x05);
    pub const SENSOR_TILE_BOX: BoardId = BoardId(0x06);
    pub const DISCOVERY_IOT01A: BoardId = BoardId(0x07);
    pub const NUCLEO: BoardId = BoardId(0x80);

    const NUCLEO_FLAG: u8 = 0x80;

    pub const fn new(code: u8) -> Self {
        BoardId(code)
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    pub const fn is_nucleo(&self) -> bool {
        self.0 & Self::NUCLEO_FLAG != 0
    }

    pub fn board_type(&self) -> BoardType {
        match *self {
            BoardId::GENERIC => BoardType::Generic,
            BoardId::STEVAL_WESU1 => BoardType::StevalWesu1,
            BoardId::SENSOR_TILE => BoardType::SensorTile,
            BoardId::BLUE_COIN => BoardType::BlueCoin,
            BoardId::STEVAL_IDB008VX => BoardType::StevalIdb008vx,
            BoardId::STEVAL_BCN002V1 => BoardType::StevalBcn002v1,
            BoardId::SENSOR_TILE_BOX => BoardType::SensorTileBox,
            BoardId::DISCOVERY_IOT01A => BoardType::DiscoveryIot01a,
            id if id.is_nucleo() => BoardType::Nucleo,
            id => BoardType::Unknown(id.0),
        }
    }
}

impl fmt::Debug for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoardId({:#04x})", self.0)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl From<u8> for BoardId {
    fn from(code: u8) -> Self {
        BoardId(code)
    }
}

impl From<BoardId> for u8 {
    fn from(id: BoardId) -> u8 {
        id.0
    }
}

/// The kind of board behind a [`BoardId`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardType {
    Generic,
    StevalWesu1,
    SensorTile,
    BlueCoin,
    StevalIdb008vx,
    StevalBcn002v1,
    SensorTileBox,
    DiscoveryIot01a,
    Nucleo,
    /// A device type code not known by this library
    Unknown(u8),
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardType::Generic => f.write_str("Generic"),
            BoardType::StevalWesu1 => f.write_str("STEVAL-WESU1"),
            BoardType::SensorTile => f.write_str("SensorTile"),
            BoardType::BlueCoin => f.write_str("BlueCoin"),
            BoardType::StevalIdb008vx => f.write_str("STEVAL-IDB008VX"),
            BoardType::StevalBcn002v1 => f.write_str("STEVAL-BCN002V1"),
            BoardType::SensorTileBox => f.write_str("SensorTile.box"),
            BoardType::DiscoveryIot01a => f.write_str("B-L475E-IOT01A"),
            BoardType::Nucleo => f.write_str("Nucleo"),
            BoardType::Unknown(code) => write!(f, "Unknown ({:#04x})", code),
        }
    }
}
