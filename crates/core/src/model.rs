use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A value the hardware does not report.
pub const NOT_SUPPORTED: i32 = -1;

/// Polling frequency of a zone that does not poll itself.
pub const DISABLED: i32 = -4;

/// Where the machine currently draws power from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    Ac,
    Battery,
    Error,
}

impl Default for PowerState {
    fn default() -> Self {
        Self::Error
    }
}

/// Thermal zone state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalState {
    /// Critical temperature, the system will go to S4
    Critical,
    /// High temperature, the system will shut down
    Hot,
    Passive,
    Active,
    Ok,
    Error,
}

impl Default for ThermalState {
    fn default() -> Self {
        Self::Error
    }
}

/// Charge state of a battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeState {
    Charging,
    Discharging,
    Charged,
    /// Hardware doesn't say
    NoInfo,
    Error,
}

impl Default for ChargeState {
    fn default() -> Self {
        Self::NoInfo
    }
}

/// How much battery life is left, ordered from most to least
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryLevel {
    High,
    Medium,
    Low,
    Critical,
    /// A few minutes left
    HardCritical,
    /// No state has been read yet
    Error,
}

impl Default for BatteryLevel {
    fn default() -> Self {
        Self::Error
    }
}

/// Cooling policy of a thermal zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolingMode {
    /// Fans are turned on past a trip point
    Active,
    /// Devices are throttled past a trip point
    Passive,
    /// The system suspends to disk past a trip point
    Critical,
    Error,
}

impl Default for CoolingMode {
    fn default() -> Self {
        Self::Error
    }
}

/// Fan state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanState {
    On,
    Off,
    Error,
}

impl Default for FanState {
    fn default() -> Self {
        Self::Error
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ac => "on-line",
            Self::Battery => "off-line",
            Self::Error => "error",
        })
    }
}

impl fmt::Display for ThermalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Critical => "critical",
            Self::Hot => "hot",
            Self::Passive => "passive",
            Self::Active => "active",
            Self::Ok => "ok",
            Self::Error => "error",
        })
    }
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Charging => "charging",
            Self::Discharging => "discharging",
            Self::Charged => "charged",
            Self::NoInfo => "unknown",
            Self::Error => "error",
        })
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Critical => "critical",
            Self::HardCritical => "hard critical",
            Self::Error => "error",
        })
    }
}

impl fmt::Display for CoolingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Passive => "passive",
            Self::Critical => "critical",
            Self::Error => "error",
        })
    }
}

impl fmt::Display for FanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Error => "error",
        })
    }
}

/// Battery information
///
/// Capacities are in mAh or mWh and voltages in mV, whichever unit the
/// firmware reports. Any integer may be [`NOT_SUPPORTED`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub name: String,
    pub state_file: PathBuf,
    pub info_file: PathBuf,
    pub alarm_file: PathBuf,
    pub present: bool,

    // static, from the info file
    pub design_cap: i32,
    pub last_full_cap: i32,
    pub design_voltage: i32,
    pub design_warn: i32,   // capacity left when the hardware warns
    pub design_low: i32,    // capacity left when the battery counts as low
    pub design_level1: i32, // capacity granularity 1
    pub design_level2: i32, // capacity granularity 2

    // dynamic, from the state file
    pub present_rate: i32,
    pub remaining_cap: i32,
    pub present_voltage: i32,

    /// Hardware alarm threshold, from the alarm file
    pub alarm: i32,

    /// Remaining charge, 0-100
    pub percentage: i32,
    /// Minutes until fully charged
    pub charge_time: i32,
    /// Minutes until empty
    pub remaining_time: i32,
    pub charge_state: ChargeState,
    pub level: BatteryLevel,
}

impl Battery {
    pub fn new(name: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            state_file: dir.join("state"),
            info_file: dir.join("info"),
            alarm_file: dir.join("alarm"),
            present: false,
            design_cap: NOT_SUPPORTED,
            last_full_cap: NOT_SUPPORTED,
            design_voltage: NOT_SUPPORTED,
            design_warn: NOT_SUPPORTED,
            design_low: NOT_SUPPORTED,
            design_level1: NOT_SUPPORTED,
            design_level2: NOT_SUPPORTED,
            present_rate: NOT_SUPPORTED,
            remaining_cap: NOT_SUPPORTED,
            present_voltage: NOT_SUPPORTED,
            alarm: NOT_SUPPORTED,
            percentage: NOT_SUPPORTED,
            charge_time: 0,
            remaining_time: 0,
            charge_state: ChargeState::default(),
            level: BatteryLevel::default(),
        }
    }
}

/// AC adapter information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adapter {
    pub name: String,
    pub state_file: PathBuf,
    pub state: PowerState,
}

impl Adapter {
    pub fn new(name: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            state_file: dir.join("state"),
            state: PowerState::default(),
        }
    }
}

/// Thermal zone information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalZone {
    pub name: String,
    pub state_file: PathBuf,
    pub temp_file: PathBuf,
    pub cooling_file: PathBuf,
    pub freq_file: PathBuf,
    /// Recorded for callers; the trip points themselves are not parsed.
    pub trips_file: PathBuf,
    /// Current temperature, in the unit the zone reports
    pub temperature: i32,
    /// Polling interval in seconds, or [`DISABLED`]
    pub frequency: i32,
    pub cooling_mode: CoolingMode,
    pub state: ThermalState,
}

impl ThermalZone {
    pub fn new(name: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            state_file: dir.join("state"),
            temp_file: dir.join("temperature"),
            cooling_file: dir.join("cooling_mode"),
            freq_file: dir.join("polling_frequency"),
            trips_file: dir.join("trip_points"),
            temperature: NOT_SUPPORTED,
            frequency: DISABLED,
            cooling_mode: CoolingMode::default(),
            state: ThermalState::default(),
        }
    }
}

/// Fan information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fan {
    pub name: String,
    pub state_file: PathBuf,
    pub state: FanState,
}

impl Fan {
    pub fn new(name: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            state_file: dir.join("state"),
            state: FanState::default(),
        }
    }
}

/// Counts and system-wide values shared by all categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSnapshot {
    pub battery_count: usize,
    pub thermal_count: usize,
    pub fan_count: usize,
    /// Temperature of the only thermal zone, when there is exactly one
    pub temperature: i32,
    pub adapter: Adapter,
}

impl Default for GlobalSnapshot {
    fn default() -> Self {
        Self {
            battery_count: 0,
            thermal_count: 0,
            fan_count: 0,
            temperature: NOT_SUPPORTED,
            adapter: Adapter::default(),
        }
    }
}

/// Everything known after a round of reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcpiReport {
    pub global: GlobalSnapshot,
    pub batteries: Vec<Battery>,
    pub thermal_zones: Vec<ThermalZone>,
    pub fans: Vec<Fan>,
}
