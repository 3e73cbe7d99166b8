//! Creation of feature handlers

use crate::kind::FeatureKind;

/// Create the handler for a kind of feature
///
/// The handlers for the features are not part of this library. An implementation of
/// `FeatureFactory` maps a [`FeatureKind`] to the handler type of the application. It is used by
/// [`FeatureRegistry::build_features`] and [`FeatureRegistry::build_extended_features`].
///
/// Closures taking a `FeatureKind` and returning an `Option` implement `FeatureFactory`.
///
/// ```
/// use blue_st_features::{BoardId, FeatureKind, FeatureMask, FeatureRegistry};
///
/// let names = FeatureRegistry::shipped().build_features(
///     BoardId::SENSOR_TILE,
///     FeatureMask::new(0x00E0_0000),
///     &|kind: FeatureKind| Some(kind.name()),
/// );
///
/// assert_eq!(vec!["Magnetometer", "Gyroscope", "Accelerometer"], names);
/// ```
///
/// [`FeatureRegistry::build_features`]: crate::FeatureRegistry::build_features
/// [`FeatureRegistry::build_extended_features`]: crate::FeatureRegistry::build_extended_features
pub trait FeatureFactory {
    type Feature;

    /// Create the handler for `kind`
    ///
    /// `None` is returned if the factory has no handler for `kind`.
    fn create(&self, kind: FeatureKind) -> Option<Self::Feature>;
}

impl<F, T> FeatureFactory for F
where
    F: Fn(FeatureKind) -> Option<T>,
{
    type Feature = T;

    fn create(&self, kind: FeatureKind) -> Option<T> {
        self(kind)
    }
}
