//! Sensor and application configuration
//!
//! All configuration is compiled in and built once at startup. The
//! [`AppConfig`] value is owned by the bring-up sequencer and never mutated.

use core::fmt;

/// Delay between sampling cycles in milliseconds
pub const SAMPLE_DELAY_MS: u32 = 20;

/// Physical sensors of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// Accelerometer (BMA280 or BMI160)
    Accelerometer,
    /// Magnetometer (BMM150)
    Magnetometer,
    /// Gyroscope (BMG160 or BMI160)
    Gyroscope,
    /// Relative humidity (BME280)
    Humidity,
    /// Temperature (BME280)
    Temperature,
    /// Barometric pressure (BME280)
    Pressure,
    /// Ambient light (MAX44009)
    Light,
    /// Acoustic noise (AKU340)
    Noise,
}

impl SensorKind {
    /// All sensor kinds
    pub const ALL: [SensorKind; 8] = [
        SensorKind::Accelerometer,
        SensorKind::Magnetometer,
        SensorKind::Gyroscope,
        SensorKind::Humidity,
        SensorKind::Temperature,
        SensorKind::Pressure,
        SensorKind::Light,
        SensorKind::Noise,
    ];
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::Magnetometer => "magnetometer",
            SensorKind::Gyroscope => "gyroscope",
            SensorKind::Humidity => "humidity",
            SensorKind::Temperature => "temperature",
            SensorKind::Pressure => "pressure",
            SensorKind::Light => "light",
            SensorKind::Noise => "noise",
        };
        f.write_str(s)
    }
}

/// Which physical sensors are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorEnableSet {
    /// Accelerometer enabled
    pub accel: bool,
    /// Magnetometer enabled
    pub mag: bool,
    /// Gyroscope enabled
    pub gyro: bool,
    /// Humidity enabled
    pub humidity: bool,
    /// Temperature enabled
    pub temperature: bool,
    /// Pressure enabled
    pub pressure: bool,
    /// Light enabled
    pub light: bool,
    /// Noise enabled
    pub noise: bool,
}

impl SensorEnableSet {
    /// Board default: everything except the noise sensor
    pub const fn xdk110() -> Self {
        Self {
            accel: true,
            mag: true,
            gyro: true,
            humidity: true,
            temperature: true,
            pressure: true,
            light: true,
            noise: false,
        }
    }

    /// Check if a sensor is enabled
    pub const fn is_enabled(&self, kind: SensorKind) -> bool {
        match kind {
            SensorKind::Accelerometer => self.accel,
            SensorKind::Magnetometer => self.mag,
            SensorKind::Gyroscope => self.gyro,
            SensorKind::Humidity => self.humidity,
            SensorKind::Temperature => self.temperature,
            SensorKind::Pressure => self.pressure,
            SensorKind::Light => self.light,
            SensorKind::Noise => self.noise,
        }
    }

    /// Number of enabled sensors
    pub fn count(&self) -> usize {
        SensorKind::ALL
            .iter()
            .filter(|kind| self.is_enabled(**kind))
            .count()
    }
}

/// Accelerometer chip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelVariant {
    /// Bosch BMA280
    Bma280,
    /// Bosch BMI160 accelerometer part
    Bmi160,
}

/// Gyroscope chip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroVariant {
    /// Bosch BMG160
    Bmg160,
    /// Bosch BMI160 gyroscope part
    Bmi160,
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Chip variant
    pub variant: AccelVariant,
    /// Data-ready/motion interrupt enabled
    pub interrupt_enabled: bool,
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Chip variant
    pub variant: GyroVariant,
    /// Report raw register values instead of scaled units
    pub raw_data: bool,
}

/// Magnetometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    /// Report raw register values instead of scaled units
    pub raw_data: bool,
}

/// Light sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightConfig {
    /// Threshold interrupt enabled
    pub interrupt_enabled: bool,
}

/// Per-sensor configuration
///
/// Entries for sensors disabled in the [`SensorEnableSet`] are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Accelerometer
    pub accel: AccelConfig,
    /// Gyroscope
    pub gyro: GyroConfig,
    /// Magnetometer
    pub mag: MagConfig,
    /// Light sensor
    pub light: LightConfig,
}

impl SensorConfig {
    /// Board default configuration
    pub const fn xdk110() -> Self {
        Self {
            accel: AccelConfig {
                variant: AccelVariant::Bma280,
                interrupt_enabled: false,
            },
            gyro: GyroConfig {
                variant: GyroVariant::Bmg160,
                raw_data: false,
            },
            mag: MagConfig { raw_data: false },
            light: LightConfig {
                interrupt_enabled: false,
            },
        }
    }
}

/// Sensor setup handed to the sensor subsystem's `configure`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSetup {
    /// Enabled sensors
    pub enable: SensorEnableSet,
    /// Per-sensor configuration
    pub config: SensorConfig,
}

/// Sensor setup validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No sensor is enabled
    NothingEnabled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NothingEnabled => write!(f, "No sensor enabled"),
        }
    }
}

impl SensorSetup {
    /// Board default setup
    pub const fn xdk110() -> Self {
        Self {
            enable: SensorEnableSet::xdk110(),
            config: SensorConfig::xdk110(),
        }
    }

    /// Check the setup before handing it to the sensor subsystem
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enable.count() == 0 {
            return Err(ConfigError::NothingEnabled);
        }
        Ok(())
    }

    /// Accelerometer configuration, if the accelerometer is enabled
    pub fn accel(&self) -> Option<&AccelConfig> {
        self.enable.accel.then_some(&self.config.accel)
    }

    /// Gyroscope configuration, if the gyroscope is enabled
    pub fn gyro(&self) -> Option<&GyroConfig> {
        self.enable.gyro.then_some(&self.config.gyro)
    }

    /// Magnetometer configuration, if the magnetometer is enabled
    pub fn mag(&self) -> Option<&MagConfig> {
        self.enable.mag.then_some(&self.config.mag)
    }

    /// Light sensor configuration, if the light sensor is enabled
    pub fn light(&self) -> Option<&LightConfig> {
        self.enable.light.then_some(&self.config.light)
    }
}

impl Default for SensorSetup {
    fn default() -> Self {
        Self::xdk110()
    }
}

/// Application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Sensor setup
    pub sensors: SensorSetup,
    /// Delay between sampling cycles in milliseconds
    pub sample_delay_ms: u32,
}

impl AppConfig {
    /// Board default configuration
    pub const fn xdk110() -> Self {
        Self {
            sensors: SensorSetup::xdk110(),
            sample_delay_ms: SAMPLE_DELAY_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::xdk110()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enable_set() {
        let enable = SensorEnableSet::xdk110();
        assert!(enable.is_enabled(SensorKind::Accelerometer));
        assert!(enable.is_enabled(SensorKind::Light));
        assert!(!enable.is_enabled(SensorKind::Noise));
        assert_eq!(enable.count(), 7);
    }

    #[test]
    fn test_default_sensor_config() {
        let config = SensorConfig::xdk110();
        assert_eq!(config.accel.variant, AccelVariant::Bma280);
        assert!(!config.accel.interrupt_enabled);
        assert_eq!(config.gyro.variant, GyroVariant::Bmg160);
        assert!(!config.gyro.raw_data);
        assert!(!config.mag.raw_data);
        assert!(!config.light.interrupt_enabled);
    }

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.sample_delay_ms, 20);
        assert_eq!(config.sensors, SensorSetup::xdk110());
    }

    #[test]
    fn test_disabled_sensor_config_is_hidden() {
        let mut setup = SensorSetup::xdk110();
        setup.enable.light = false;
        assert!(setup.light().is_none());
        assert!(setup.accel().is_some());
    }

    #[test]
    fn test_validate_rejects_empty_enable_set() {
        let setup = SensorSetup {
            enable: SensorEnableSet::default(),
            config: SensorConfig::xdk110(),
        };
        assert_eq!(setup.validate(), Err(ConfigError::NothingEnabled));
        assert!(SensorSetup::xdk110().validate().is_ok());
    }
}
