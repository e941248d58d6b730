//! Battery `info`, `state` and `alarm` files.

use crate::{
    error::{AcpiError, Result},
    fields::{self, FieldSetter},
    model::{Battery, ChargeState, NOT_SUPPORTED},
    scan::scan_value,
};

/// Some firmware reports this design capacity for an empty slot.
const BOGUS_DESIGN_CAPACITY: i32 = 655350;

#[derive(Debug, Clone, Copy)]
pub enum BatteryField {
    LastFullCap,
    DesignVoltage,
    DesignWarn,
    DesignLow,
    DesignLevel1,
    DesignLevel2,
    PresentRate,
    RemainingCap,
    PresentVoltage,
}

impl FieldSetter<Battery> for BatteryField {
    fn set(&self, battery: &mut Battery, value: i32) {
        let slot = match self {
            Self::LastFullCap => &mut battery.last_full_cap,
            Self::DesignVoltage => &mut battery.design_voltage,
            Self::DesignWarn => &mut battery.design_warn,
            Self::DesignLow => &mut battery.design_low,
            Self::DesignLevel1 => &mut battery.design_level1,
            Self::DesignLevel2 => &mut battery.design_level2,
            Self::PresentRate => &mut battery.present_rate,
            Self::RemainingCap => &mut battery.remaining_cap,
            Self::PresentVoltage => &mut battery.present_voltage,
        };
        *slot = value;
    }
}

const INFO_FIELDS: &[(&str, BatteryField)] = &[
    ("last full capacity:", BatteryField::LastFullCap),
    ("design voltage:", BatteryField::DesignVoltage),
    ("design capacity warning:", BatteryField::DesignWarn),
    ("design capacity low:", BatteryField::DesignLow),
    ("capacity granularity 1:", BatteryField::DesignLevel1),
    ("capacity granularity 2:", BatteryField::DesignLevel2),
];

const STATE_FIELDS: &[(&str, BatteryField)] = &[
    ("present rate:", BatteryField::PresentRate),
    ("remaining capacity:", BatteryField::RemainingCap),
    ("present voltage:", BatteryField::PresentVoltage),
];

/// Update the presence flag. A battery can be pulled at any time, so every
/// file read starts here.
fn check_present(buf: &str, battery: &mut Battery) -> Result<()> {
    battery.present = scan_value(buf, "present:").is_some_and(|v| v.starts_with("yes"));

    if battery.present {
        Ok(())
    } else {
        Err(AcpiError::not_present(battery.name.clone()))
    }
}

/// Map a `charging state:` token. The more specific prefixes are checked
/// first, in this order.
pub fn charge_state(token: &str) -> ChargeState {
    if token.starts_with('u') {
        ChargeState::Error
    } else if token.starts_with("disch") {
        ChargeState::Discharging
    } else if token.starts_with("charge") {
        ChargeState::Charged
    } else if token.starts_with("chargi") {
        ChargeState::Charging
    } else {
        ChargeState::NoInfo
    }
}

/// Parse the static `info` file.
pub fn parse_info(buf: &str, battery: &mut Battery) -> Result<()> {
    check_present(buf, battery)?;

    battery.design_cap = match fields::scan_int(buf, "design capacity:") {
        BOGUS_DESIGN_CAPACITY => NOT_SUPPORTED,
        cap => cap,
    };
    fields::extract_fields(buf, INFO_FIELDS, battery);

    Ok(())
}

/// Parse the dynamic `state` file and re-rank the battery on the severity
/// ladder.
pub fn parse_state(buf: &str, battery: &mut Battery) -> Result<()> {
    check_present(buf, battery)?;

    battery.charge_state = match scan_value(buf, "charging state:") {
        Some(token) => charge_state(&token),
        None => ChargeState::NoInfo,
    };
    fields::extract_fields(buf, STATE_FIELDS, battery);
    battery.classify_level();

    Ok(())
}

pub fn parse_alarm(buf: &str, battery: &mut Battery) {
    battery.alarm = fields::scan_int(buf, "alarm:");
}
