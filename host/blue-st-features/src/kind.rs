//! Feature handler tags

use core::fmt;

macro_rules! feature_kinds {
    ( $( $(#[$attr:meta])* $kind:ident => $name:literal, )* ) => {
        /// The kind of handler used to decode the payload of a feature
        ///
        /// The handlers themselves live above this library. A `FeatureKind` only identifies which
        /// handler is to be created, the creation is done by a [`FeatureFactory`].
        ///
        /// [`FeatureFactory`]: crate::FeatureFactory
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[non_exhaustive]
        pub enum FeatureKind {
            $( $(#[$attr])* $kind, )*
        }

        impl FeatureKind {
            /// Every feature kind in declaration order
            pub const ALL: &'static [FeatureKind] = &[ $( FeatureKind::$kind, )* ];

            /// The display name of the feature
            pub fn name(&self) -> &'static str {
                match self {
                    $( FeatureKind::$kind => $name, )*
                }
            }
        }
    };
}

feature_kinds! {
    Pedometer => "Pedometer",
    MemsGesture => "MEMS Gesture",
    ProximityGesture => "Proximity Gesture",
    CarryPosition => "Carry Position",
    Activity => "Activity Recognition",
    MotionIntensity => "Motion Intensity",
    Compass => "Compass",
    SensorFusion => "Sensor Fusion",
    SensorFusionCompact => "Sensor Fusion Compact",
    FreeFall => "Free Fall",
    AccelerometerEvent => "Accelerometer Events",
    BeamForming => "Beam Forming",
    SdLogging => "SD Logging",
    CoSensor => "CO Sensor",
    SecondaryTemperature => "Secondary Temperature",
    Battery => "Battery",
    Temperature => "Temperature",
    Humidity => "Humidity",
    Pressure => "Pressure",
    Magnetometer => "Magnetometer",
    Gyroscope => "Gyroscope",
    Acceleration => "Accelerometer",
    Luminosity => "Luminosity",
    Proximity => "Proximity",
    MicLevel => "Mic Level",
    AudioAdpcm => "Audio ADPCM",
    DirectionOfArrival => "Direction of Arrival",
    Switch => "Switch",
    AudioAdpcmSync => "Audio ADPCM Sync",
    EventCounter => "Event Counter",
    Qvar => "Qvar",
    Led => "LED",
    AudioOpus => "Audio Opus",
    AudioOpusConf => "Audio Opus Conf",
    AudioClassification => "Audio Classification",
    AiLogging => "AI Logging",
    MotionAlgorithm => "Motion Algorithm",
    FitnessActivity => "Fitness Activity",
    PredictiveSpeedStatus => "Predictive Speed Status",
    PredictiveAccelerationStatus => "Predictive Acceleration Status",
    PredictiveFrequencyDomainStatus => "Predictive Frequency Domain Status",
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
