//! Values computed from already parsed battery fields.

use crate::model::{Battery, BatteryLevel, ChargeState, NOT_SUPPORTED};

/// Remaining charge in percent, capped at 100.
///
/// A last full capacity of zero or less is treated as 1 so the division is
/// always defined.
pub fn percentage(remaining_cap: i32, last_full_cap: i32) -> i32 {
    if remaining_cap < 0 {
        return NOT_SUPPORTED;
    }

    let full = f64::from(last_full_cap.max(1));
    let perc = (f64::from(remaining_cap) / full * 100.0).round() as i32;
    perc.min(100)
}

/// Place the remaining capacity on the severity ladder.
///
/// The boundaries are `high = last_full / 2` and `med = high / 2`, both in
/// integer arithmetic. Each band excludes its lower bound, so a tie lands in
/// the more severe band.
pub fn classify_level(
    remaining_cap: i32,
    last_full_cap: i32,
    design_warn: i32,
    design_low: i32,
) -> BatteryLevel {
    let high = last_full_cap / 2;
    let med = high / 2;

    if remaining_cap > high {
        BatteryLevel::High
    } else if remaining_cap <= high && remaining_cap > med {
        BatteryLevel::Medium
    } else if remaining_cap <= med && remaining_cap > design_warn {
        BatteryLevel::Low
    } else if remaining_cap <= design_warn && remaining_cap > design_low {
        BatteryLevel::Critical
    } else {
        BatteryLevel::HardCritical
    }
}

/// Minutes until the battery is full, 0 unless it is charging.
pub fn charge_time(
    present_rate: i32,
    remaining_cap: i32,
    last_full_cap: i32,
    state: ChargeState,
) -> i32 {
    if present_rate <= 0 || state != ChargeState::Charging {
        return 0;
    }

    let missing = f64::from(last_full_cap) - f64::from(remaining_cap);
    (missing / f64::from(present_rate) * 60.0) as i32
}

/// Minutes until the battery is empty, 0 unless it is discharging.
pub fn remaining_time(present_rate: i32, remaining_cap: i32, state: ChargeState) -> i32 {
    if present_rate <= 0 || state != ChargeState::Discharging {
        return 0;
    }

    (f64::from(remaining_cap) / f64::from(present_rate) * 60.0) as i32
}

impl Battery {
    pub fn classify_level(&mut self) {
        self.level = classify_level(
            self.remaining_cap,
            self.last_full_cap,
            self.design_warn,
            self.design_low,
        );
    }

    /// Recompute percentage and both time estimates.
    pub fn refresh_derived(&mut self) {
        self.percentage = percentage(self.remaining_cap, self.last_full_cap);
        self.charge_time = charge_time(
            self.present_rate,
            self.remaining_cap,
            self.last_full_cap,
            self.charge_state,
        );
        self.remaining_time = remaining_time(self.present_rate, self.remaining_cap, self.charge_state);
    }
}
