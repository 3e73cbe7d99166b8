//! Board feature registry
//!
//! A node advertises the set of features it exports as a [`FeatureMask`]. What feature a bit of
//! the mask stands for depends on the board. Most boards use the default bit layout, but some
//! boards use a few bits for something else. A [`FeatureRegistry`] contains the tables to map
//! every bit of an advertised mask to the kinds of handler needed to decode it.
//!
//! # Resolution
//! The bits of a mask are processed in ascending order. For every bit the table of the board is
//! checked first and then the default table. A bit found in neither table is an unknown feature,
//! it is skipped and recorded within the [`Resolution`]. Resolution never fails and never stops
//! at an unknown bit.
//!
//! ```
//! use blue_st_features::{BoardId, FeatureKind, FeatureMask, FeatureRegistry, TableSource};
//!
//! let registry = FeatureRegistry::shipped();
//!
//! // Bit 2 is an accelerometer event for the STEVAL-WESU1, bit 0 is from the default table
//! let resolution = registry.resolve(BoardId::STEVAL_WESU1, FeatureMask::new(0b0101));
//!
//! let features = resolution.features();
//!
//! assert_eq!(&[FeatureKind::Pedometer], features[0].kinds);
//! assert_eq!(TableSource::Default, features[0].source);
//! assert_eq!(&[FeatureKind::AccelerometerEvent], features[1].kinds);
//! assert_eq!(TableSource::Board, features[1].source);
//! ```
//!
//! # Custom Registries
//! The shipped registry is built from the catalog of this library. Applications with their own
//! boards or firmware build a registry with a [`FeatureRegistryBuilder`].

use crate::board::BoardId;
use crate::catalog::{self, StaticTable};
use crate::characteristics::{is_extended_feature_characteristic, EXTENDED_FEATURE_BASE};
use crate::factory::FeatureFactory;
use crate::kind::FeatureKind;
use crate::mask::FeatureMask;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use blue_st_host_util::{Characteristic, Uuid};
use core::fmt;

/// A mapping of single bit feature masks to the kinds of handler for that bit
///
/// The handler kinds of an entry are ordered, the order is the order in which the handlers are
/// applied to the payload of the characteristic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureMap {
    map: BTreeMap<FeatureMask, Vec<FeatureKind>>,
}

impl FeatureMap {
    fn from_table(table: StaticTable) -> Self {
        let map = table
            .iter()
            .map(|(key, kinds)| (FeatureMask::new(*key), kinds.to_vec()))
            .collect();

        FeatureMap { map }
    }

    /// Get the handler kinds for `bit`
    pub fn get(&self, bit: FeatureMask) -> Option<&[FeatureKind]> {
        self.map.get(&bit).map(|kinds| kinds.as_slice())
    }

    pub fn contains(&self, bit: FeatureMask) -> bool {
        self.map.contains_key(&bit)
    }

    /// Iterate over the entries in ascending order of their bit
    pub fn iter(&self) -> impl Iterator<Item = (FeatureMask, &[FeatureKind])> + '_ {
        self.map.iter().map(|(mask, kinds)| (*mask, kinds.as_slice()))
    }

    /// Get the union of every bit within this map
    pub fn mask(&self) -> FeatureMask {
        self.map.keys().fold(FeatureMask::EMPTY, |acc, bit| acc | *bit)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The table that resolved a bit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableSource {
    /// The board specific table
    Board,
    /// The default table
    Default,
}

/// A resolved bit of a feature mask
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedFeature<'a> {
    /// The single bit mask of the feature
    pub mask: FeatureMask,
    /// The handler kinds, in the order they are applied
    pub kinds: &'a [FeatureKind],
    pub source: TableSource,
}

/// The result of resolving an advertised feature mask
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    board: BoardId,
    features: Vec<ResolvedFeature<'a>>,
    unknown: FeatureMask,
}

impl<'a> Resolution<'a> {
    pub fn board(&self) -> BoardId {
        self.board
    }

    /// The resolved features in ascending order of their bit
    pub fn features(&self) -> &[ResolvedFeature<'a>] {
        &self.features
    }

    /// The bits that were not found in any table
    pub fn unknown(&self) -> FeatureMask {
        self.unknown
    }

    /// Check if every bit of the mask was resolved
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }

    /// Iterate over the handler kinds of every resolved feature
    pub fn kinds(&self) -> impl Iterator<Item = FeatureKind> + '_ {
        self.features.iter().flat_map(|feature| feature.kinds.iter().copied())
    }
}

/// Identifies a table of a registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CatalogTable {
    Default,
    Board(BoardId),
    Extended,
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogTable::Default => f.write_str("default feature table"),
            CatalogTable::Board(board) => write!(f, "feature table of board {}", board),
            CatalogTable::Extended => f.write_str("extended feature table"),
        }
    }
}

/// Error for a malformed feature table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The key of a bit table entry is empty or has more than one bit
    NotASingleBit { table: CatalogTable, mask: FeatureMask },
    /// An entry has no handler kinds
    NoFeatureKinds { table: CatalogTable, key: u32 },
    /// The same key was added twice to a table
    DuplicateEntry { table: CatalogTable, key: u32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::NotASingleBit { table, mask } => {
                write!(f, "mask {} of the {} is not a single bit", mask, table)
            }
            CatalogError::NoFeatureKinds { table, key } => {
                write!(f, "entry {:#010x} of the {} has no feature kinds", key, table)
            }
            CatalogError::DuplicateEntry { table, key } => {
                write!(f, "entry {:#010x} was added twice to the {}", key, table)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

lazy_static::lazy_static! {
    static ref SHIPPED: FeatureRegistry = FeatureRegistry::from_catalog();
}

/// The feature tables for resolving feature masks and extended feature characteristics
///
/// A `FeatureRegistry` is immutable once built. The registry built from the catalog of this
/// library is returned by [`shipped`](FeatureRegistry::shipped), other registries are built with
/// a [`FeatureRegistryBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureRegistry {
    boards: BTreeMap<BoardId, FeatureMap>,
    default: FeatureMap,
    extended: BTreeMap<u32, Vec<FeatureKind>>,
}

impl FeatureRegistry {
    fn from_catalog() -> Self {
        log::trace!("(BlueST) building the shipped feature registry");

        FeatureRegistry {
            boards: catalog::BOARD_FEATURES
                .iter()
                .map(|(board, table)| (*board, FeatureMap::from_table(*table)))
                .collect(),
            default: FeatureMap::from_table(catalog::DEFAULT_FEATURES),
            extended: catalog::EXTENDED_FEATURES
                .iter()
                .map(|(id, kinds)| (*id, kinds.to_vec()))
                .collect(),
        }
    }

    fn empty() -> Self {
        FeatureRegistry {
            boards: BTreeMap::new(),
            default: FeatureMap::default(),
            extended: BTreeMap::new(),
        }
    }

    /// Get the registry built from the catalog of this library
    ///
    /// The registry is built on the first call, every call returns the same registry.
    pub fn shipped() -> &'static FeatureRegistry {
        &SHIPPED
    }

    /// Create a builder for a registry without any entries
    pub fn builder() -> FeatureRegistryBuilder {
        FeatureRegistryBuilder::new()
    }

    /// Get the board specific tables
    ///
    /// A board specific table only contains the bits where the board differs from the
    /// [default table](FeatureRegistry::default_mask_to_feature_map).
    pub fn board_feature_map(&self) -> &BTreeMap<BoardId, FeatureMap> {
        &self.boards
    }

    /// Get the table used for the bits not within the table of a board
    pub fn default_mask_to_feature_map(&self) -> &FeatureMap {
        &self.default
    }

    pub fn board_features(&self, board: BoardId) -> Option<&FeatureMap> {
        self.boards.get(&board)
    }

    /// Look up `bit` for `board`
    ///
    /// The table of the board takes precedence over the default table.
    pub fn lookup(&self, board: BoardId, bit: FeatureMask) -> Option<(TableSource, &[FeatureKind])> {
        self.boards
            .get(&board)
            .and_then(|map| map.get(bit))
            .map(|kinds| (TableSource::Board, kinds))
            .or_else(|| self.default.get(bit).map(|kinds| (TableSource::Default, kinds)))
    }

    /// Get the handler kinds for a single `bit` of `board`
    ///
    /// An empty slice is returned if neither the table of the board nor the default table
    /// contains the bit.
    pub fn resolve_bit(&self, board: BoardId, bit: FeatureMask) -> &[FeatureKind] {
        self.lookup(board, bit).map(|(_, kinds)| kinds).unwrap_or(&[])
    }

    /// Resolve every bit of an advertised feature mask
    pub fn resolve(&self, board: BoardId, mask: FeatureMask) -> Resolution<'_> {
        let mut features = Vec::with_capacity(mask.count() as usize);
        let mut unknown = FeatureMask::EMPTY;

        for bit in mask.bits() {
            match self.lookup(board, bit) {
                Some((source, kinds)) => features.push(ResolvedFeature { mask: bit, kinds, source }),
                None => {
                    log::debug!("(BlueST) board {} has no known feature for bit {}", board, bit);

                    unknown |= bit
                }
            }
        }

        Resolution {
            board,
            features,
            unknown,
        }
    }

    /// Get the handler kinds for an extended feature id
    pub fn extended_feature(&self, id: u32) -> &[FeatureKind] {
        self.extended.get(&id).map(|kinds| kinds.as_slice()).unwrap_or(&[])
    }

    /// Get the handler kinds of an extended feature characteristic
    ///
    /// The handler kinds are in the order they are to be applied to the payload. An empty slice
    /// is returned if `c` is not an extended feature characteristic or if its id is not known.
    pub fn extended_features<C: Characteristic>(&self, c: &C) -> &[FeatureKind] {
        let uuid = c.uuid();

        if is_extended_feature_characteristic(&uuid) {
            self.extended_feature(uuid.most_significant_u32())
        } else {
            &[]
        }
    }

    /// Iterate over the UUIDs of every known extended feature characteristic
    pub fn extended_feature_uuids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.extended
            .keys()
            .map(|id| EXTENDED_FEATURE_BASE.with_most_significant_u32(*id))
    }

    /// Create the handlers for the advertised feature mask of a node
    ///
    /// Handlers are created with `factory` in the order of the resolution. Unknown bits are
    /// skipped, as are the kinds `factory` declines to create.
    pub fn build_features<F: FeatureFactory>(&self, board: BoardId, mask: FeatureMask, factory: &F) -> Vec<F::Feature> {
        let resolution = self.resolve(board, mask);

        create_all(resolution.kinds(), factory)
    }

    /// Create the handlers for an extended feature characteristic
    pub fn build_extended_features<C, F>(&self, c: &C, factory: &F) -> Vec<F::Feature>
    where
        C: Characteristic,
        F: FeatureFactory,
    {
        create_all(self.extended_features(c).iter().copied(), factory)
    }
}

fn create_all<I, F>(kinds: I, factory: &F) -> Vec<F::Feature>
where
    I: Iterator<Item = FeatureKind>,
    F: FeatureFactory,
{
    kinds
        .filter_map(|kind| {
            let feature = factory.create(kind);

            if feature.is_none() {
                log::warn!("(BlueST) no handler was created for feature '{}'", kind);
            }

            feature
        })
        .collect()
}

/// Get the board specific tables of the shipped registry
pub fn board_feature_map() -> &'static BTreeMap<BoardId, FeatureMap> {
    FeatureRegistry::shipped().board_feature_map()
}

/// Get the default table of the shipped registry
pub fn default_mask_to_feature_map() -> &'static FeatureMap {
    FeatureRegistry::shipped().default_mask_to_feature_map()
}

struct Entry {
    table: CatalogTable,
    key: u32,
    kinds: Vec<FeatureKind>,
}

/// Builder of a [`FeatureRegistry`]
///
/// A builder starts either empty ([`new`]) or with the shipped catalog ([`from_shipped`]).
/// Entries added to the builder replace the entries of the shipped catalog with the same key, but
/// adding the same key twice to a builder is an error.
///
/// ```
/// use blue_st_features::{BoardId, FeatureKind, FeatureMask, FeatureRegistryBuilder};
///
/// let my_board = BoardId::new(0x42);
///
/// let registry = FeatureRegistryBuilder::from_shipped()
///     .board_feature(my_board, FeatureMask::from_bit_index(13), [FeatureKind::Qvar])
///     .build()
///     .unwrap();
///
/// assert_eq!(&[FeatureKind::Qvar], registry.resolve_bit(my_board, FeatureMask::from_bit_index(13)));
/// ```
///
/// [`new`]: FeatureRegistryBuilder::new
/// [`from_shipped`]: FeatureRegistryBuilder::from_shipped
pub struct FeatureRegistryBuilder {
    base: Option<&'static FeatureRegistry>,
    entries: Vec<Entry>,
}

impl FeatureRegistryBuilder {
    pub fn new() -> Self {
        FeatureRegistryBuilder {
            base: None,
            entries: Vec::new(),
        }
    }

    pub fn from_shipped() -> Self {
        FeatureRegistryBuilder {
            base: Some(FeatureRegistry::shipped()),
            entries: Vec::new(),
        }
    }

    fn entry<K>(mut self, table: CatalogTable, key: u32, kinds: K) -> Self
    where
        K: IntoIterator<Item = FeatureKind>,
    {
        self.entries.push(Entry {
            table,
            key,
            kinds: kinds.into_iter().collect(),
        });

        self
    }

    /// Add a bit to the default table
    pub fn default_feature<K>(self, bit: FeatureMask, kinds: K) -> Self
    where
        K: IntoIterator<Item = FeatureKind>,
    {
        self.entry(CatalogTable::Default, bit.get(), kinds)
    }

    /// Add a bit to the table of `board`
    pub fn board_feature<K>(self, board: BoardId, bit: FeatureMask, kinds: K) -> Self
    where
        K: IntoIterator<Item = FeatureKind>,
    {
        self.entry(CatalogTable::Board(board), bit.get(), kinds)
    }

    /// Add an extended feature id
    pub fn extended_feature<K>(self, id: u32, kinds: K) -> Self
    where
        K: IntoIterator<Item = FeatureKind>,
    {
        self.entry(CatalogTable::Extended, id, kinds)
    }

    /// Build the registry
    ///
    /// # Error
    /// An error is returned if a key of the default or a board table is not a single bit, if an
    /// entry has no feature kinds, or if a key was added more than once to the same table.
    pub fn build(self) -> Result<FeatureRegistry, CatalogError> {
        let mut registry = self.base.cloned().unwrap_or_else(FeatureRegistry::empty);

        let mut added = BTreeSet::new();

        for Entry { table, key, kinds } in self.entries {
            if table != CatalogTable::Extended && !key.is_power_of_two() {
                return Err(CatalogError::NotASingleBit {
                    table,
                    mask: FeatureMask::new(key),
                });
            }

            if kinds.is_empty() {
                return Err(CatalogError::NoFeatureKinds { table, key });
            }

            if !added.insert((table, key)) {
                return Err(CatalogError::DuplicateEntry { table, key });
            }

            match table {
                CatalogTable::Default => {
                    registry.default.map.insert(FeatureMask::new(key), kinds);
                }
                CatalogTable::Board(board) => {
                    registry
                        .boards
                        .entry(board)
                        .or_default()
                        .map
                        .insert(FeatureMask::new(key), kinds);
                }
                CatalogTable::Extended => {
                    registry.extended.insert(key, kinds);
                }
            }
        }

        log::info!(
            "(BlueST) built a feature registry with {} board tables, {} default and {} extended \
            features",
            registry.boards.len(),
            registry.default.len(),
            registry.extended.len()
        );

        Ok(registry)
    }
}

impl Default for FeatureRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
