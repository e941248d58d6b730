//! Thermal zone files. Each one is optional; a missing file only affects the
//! field it feeds.
//!
//! Trip points (`trip_points`) are not parsed.

use crate::{
    model::{CoolingMode, ThermalState, DISABLED},
    scan::{parse_int, scan_value},
};

pub fn thermal_state(token: &str) -> ThermalState {
    if token.starts_with('o') {
        ThermalState::Ok
    } else if token.starts_with("crit") {
        ThermalState::Critical
    } else if token.starts_with("hot") {
        ThermalState::Hot
    } else if token.starts_with("pas") {
        ThermalState::Passive
    } else {
        ThermalState::Active
    }
}

pub fn cooling_mode(token: &str) -> CoolingMode {
    if token.starts_with('a') {
        CoolingMode::Active
    } else if token.starts_with('p') {
        CoolingMode::Passive
    } else {
        CoolingMode::Critical
    }
}

pub fn parse_state(buf: &str) -> ThermalState {
    scan_value(buf, "state:")
        .map(|token| thermal_state(&token))
        .unwrap_or(ThermalState::Error)
}

/// Temperature, or `None` when the file has no `temperature:` line
pub fn parse_temperature(buf: &str) -> Option<i32> {
    scan_value(buf, "temperature:").map(|token| parse_int(&token))
}

pub fn parse_cooling_mode(buf: &str) -> CoolingMode {
    scan_value(buf, "cooling mode:")
        .map(|token| cooling_mode(&token))
        .unwrap_or(CoolingMode::Error)
}

/// Polling interval in seconds. Zones that do not poll print
/// `<polling disabled>` instead of the key.
pub fn parse_polling_frequency(buf: &str) -> i32 {
    scan_value(buf, "polling frequency:")
        .map(|token| parse_int(&token))
        .unwrap_or(DISABLED)
}
