//! Host items common between the BlueST crates
//!
//! Things that do not belong to a single service or to the feature layer are put here.
//! `host-util` is a base crate for the other crates within `host`. Generally things within this
//! lib are re-exported by the crate using them.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

/// Universally Unique Identifier
///
/// Every GATT service and characteristic is identified by a 128 bit UUID. The BlueST protocol
/// reserves families of UUIDs that share their low 96 bits and use the first 32 bits (the first
/// field of the textual form) as a variable segment. Because of this `Uuid` gives direct access
/// to both halves of the value, see [`most_significant_u32`] and [`matches_suffix`].
///
/// ```
/// # use blue_st_host_util::Uuid;
/// let uuid = Uuid::try_from("00e00000-0001-11e1-ac36-0002a5d5c51b").unwrap();
///
/// assert_eq!(0x00e00000, uuid.most_significant_u32());
///
/// // The low 96 bits are the same, only the variable segment differs
/// assert!(uuid.matches_suffix(&Uuid::from_u128(0x00000001_0001_11e1_ac36_0002a5d5c51b)));
/// ```
///
/// ## Conversion
/// A UUID can be converted to a [uuid::Uuid](https://github.com/uuid-rs/uuid) if the feature
/// `uuid-crate` is enabled.
///
/// [`most_significant_u32`]: Uuid::most_significant_u32
/// [`matches_suffix`]: Uuid::matches_suffix
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uuid {
    value: u128,
}

impl Uuid {
    /// The Bluetooth Base UUID
    ///
    /// See Vol 3 part B sec 2.5.1 of the Bluetooth Core Specification.
    const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805F9B34FB;

    /// Mask of the bits following the first field of the textual form
    const SUFFIX_MASK: u128 = !0u128 >> 32;

    pub const fn from_u128(v: u128) -> Self {
        Uuid { value: v }
    }

    /// Create a UUID from a 16 bit Bluetooth SIG assigned number
    pub const fn from_u16(v: u16) -> Self {
        Uuid {
            value: ((v as u128) << 96) | Self::BLUETOOTH_BASE_UUID,
        }
    }

    /// Create a UUID from a 32 bit Bluetooth SIG assigned number
    pub const fn from_u32(v: u32) -> Self {
        Uuid {
            value: ((v as u128) << 96) | Self::BLUETOOTH_BASE_UUID,
        }
    }

    /// Create a UUID from bytes in the order they appear in the textual form
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(<u128>::from_be_bytes(bytes))
    }

    /// Create a UUID from bytes in the order they are transferred over the air
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(<u128>::from_le_bytes(bytes))
    }

    pub const fn to_u128(&self) -> u128 {
        self.value
    }

    pub const fn to_be_bytes(&self) -> [u8; 16] {
        self.value.to_be_bytes()
    }

    /// Get the first 32 bits of the UUID
    ///
    /// These are the first eight hexadecimal digits of the textual form.
    pub const fn most_significant_u32(&self) -> u32 {
        (self.value >> 96) as u32
    }

    /// Get the low 96 bits of the UUID
    pub const fn suffix(&self) -> u128 {
        self.value & Self::SUFFIX_MASK
    }

    /// Check if the low 96 bits of `self` are the same as those of `base`
    pub const fn matches_suffix(&self, base: &Uuid) -> bool {
        self.suffix() == base.suffix()
    }

    /// Create a new UUID by replacing the first 32 bits of `self` with `prefix`
    pub const fn with_most_significant_u32(&self, prefix: u32) -> Self {
        Self::from_u128(((prefix as u128) << 96) | self.suffix())
    }
}

impl core::fmt::Display for Uuid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let v = self.value;

        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xFFFF_FFFF_FFFF,
        )
    }
}

impl core::fmt::Debug for Uuid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl From<u128> for Uuid {
    fn from(v: u128) -> Uuid {
        Self::from_u128(v)
    }
}

impl From<u32> for Uuid {
    fn from(v: u32) -> Uuid {
        Self::from_u32(v)
    }
}

impl From<u16> for Uuid {
    fn from(v: u16) -> Uuid {
        Self::from_u16(v)
    }
}

impl From<Uuid> for u128 {
    fn from(uuid: Uuid) -> u128 {
        uuid.value
    }
}

/// Create a UUID from a *little endian* ordered array
impl From<[u8; 16]> for Uuid {
    fn from(v: [u8; 16]) -> Uuid {
        Self::from_le_bytes(v)
    }
}

#[cfg(feature = "uuid-crate")]
impl From<uuid::Uuid> for Uuid {
    fn from(uuid: uuid::Uuid) -> Uuid {
        Uuid::from_u128(uuid.as_u128())
    }
}

#[cfg(feature = "uuid-crate")]
impl From<Uuid> for uuid::Uuid {
    fn from(uuid: Uuid) -> uuid::Uuid {
        uuid::Uuid::from_u128(uuid.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UuidFormatError<'a> {
    IncorrectFieldLength(&'a str),
    IncorrectLength,
    IncorrectDigit(&'a str),
}

impl core::fmt::Display for UuidFormatError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            UuidFormatError::IncorrectFieldLength(field) => {
                write!(f, "field '{}' has an incorrect number of characters", field)
            }
            UuidFormatError::IncorrectLength => f.write_str("incorrect number of fields"),
            UuidFormatError::IncorrectDigit(field) => {
                write!(f, "field '{}' contains a character that is not hexadecimal", field)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UuidFormatError<'_> {}

/// Create a UUID from its formatted type
///
/// The format is a 16 octet UUID in the form of \[8\]-\[4\]-\[4\]-\[4\]-\[12\] where each number
/// represents the number of characters for the field. Upper and lower case digits are accepted.
/// An example UUID would be '00000001-000e-11e1-ac36-0002a5d5c51b'.
impl<'a> TryFrom<&'a str> for Uuid {
    type Error = UuidFormatError<'a>;

    fn try_from(v: &'a str) -> Result<Self, Self::Error> {
        const FIELD_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

        let mut fields = v.split('-');

        let mut value = 0u128;

        for len in FIELD_LENGTHS {
            let field = fields.next().ok_or(UuidFormatError::IncorrectLength)?;

            if field.len() != len {
                return Err(UuidFormatError::IncorrectFieldLength(field));
            }

            // `from_str_radix` accepts a leading '+'
            if !field.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(UuidFormatError::IncorrectDigit(field));
            }

            let field_val = <u64>::from_str_radix(field, 16).or(Err(UuidFormatError::IncorrectDigit(field)))?;

            value = (value << (len * 4)) | field_val as u128;
        }

        if fields.next().is_some() {
            return Err(UuidFormatError::IncorrectLength);
        }

        Ok(Uuid::from_u128(value))
    }
}

/// A GATT characteristic as seen by the BlueST layer
///
/// The transport owns the actual characteristic objects (discovery, reads, notifications). The
/// only thing needed to recognize a characteristic is its UUID, so a transport implements this
/// trait for its own characteristic handle.
pub trait Characteristic {
    fn uuid(&self) -> Uuid;
}

impl Characteristic for Uuid {
    fn uuid(&self) -> Uuid {
        *self
    }
}

impl<T: Characteristic + ?Sized> Characteristic for &T {
    fn uuid(&self) -> Uuid {
        (**self).uuid()
    }
}
