use acpistat_core::{AcpiReport, Battery, InitStatus, ThermalZone, DISABLED, NOT_SUPPORTED};
use std::io::{self, Write};

/// Render the plain text report.
pub fn write_text<W: Write>(out: &mut W, report: &AcpiReport, status: &InitStatus) -> io::Result<()> {
    match status.adapter {
        Ok(()) => writeln!(out, "AC adapter: {}", report.global.adapter.state)?,
        Err(_) => writeln!(out, "AC information:\t\tnot supported")?,
    }

    match status.batteries {
        Ok(()) => {
            for battery in report.batteries.iter().filter(|b| b.present) {
                write_battery(out, battery)?;
            }
        }
        Err(_) => writeln!(out, "Battery information:\tnot supported")?,
    }

    match status.thermal {
        Ok(()) => {
            for zone in &report.thermal_zones {
                write_zone(out, zone)?;
            }
            if report.global.thermal_count == 1 {
                writeln!(out, "Temperature: {}", value(report.global.temperature, "°C"))?;
            }
        }
        Err(_) => writeln!(out, "Thermal information:\tnot supported")?,
    }

    match status.fans {
        Ok(()) => {
            for fan in &report.fans {
                writeln!(out, "\n{}:\tstate: {}", fan.name, fan.state)?;
            }
        }
        Err(_) => writeln!(out, "Fan information:\tnot supported")?,
    }

    Ok(())
}

fn write_battery<W: Write>(out: &mut W, b: &Battery) -> io::Result<()> {
    writeln!(out, "\n{}:\tpresent: yes", b.name)?;
    writeln!(out, "\tdesign capacity: {}", value(b.design_cap, ""))?;
    writeln!(out, "\tlast full capacity: {}", value(b.last_full_cap, ""))?;
    writeln!(out, "\tdesign voltage: {}", value(b.design_voltage, ""))?;
    writeln!(out, "\tpresent rate: {}", value(b.present_rate, ""))?;
    writeln!(out, "\tremaining capacity: {}", value(b.remaining_cap, ""))?;
    writeln!(out, "\tpresent voltage: {}", value(b.present_voltage, ""))?;
    writeln!(out, "\tcharge state: {}", b.charge_state)?;
    writeln!(out, "\tbattery state: {}", b.level)?;
    writeln!(out, "\tpercentage: {}", value(b.percentage, "%"))?;
    writeln!(out, "\tremaining charge time: {} h", hours(b.charge_time))?;
    writeln!(out, "\tremaining time: {} h", hours(b.remaining_time))
}

fn write_zone<W: Write>(out: &mut W, zone: &ThermalZone) -> io::Result<()> {
    writeln!(out, "\n{}:\ttemperature: {}", zone.name, value(zone.temperature, "°C"))?;
    if zone.frequency == DISABLED {
        writeln!(out, "\tfrequency: disabled")?;
    } else {
        writeln!(out, "\tfrequency: {} seconds", zone.frequency)?;
    }
    writeln!(out, "\tmode: {}", zone.cooling_mode)?;
    writeln!(out, "\tstate: {}", zone.state)
}

fn value(v: i32, unit: &str) -> String {
    if v == NOT_SUPPORTED {
        "not supported".to_string()
    } else if unit.is_empty() {
        v.to_string()
    } else if unit == "%" {
        format!("{}%", v)
    } else {
        format!("{} {}", v, unit)
    }
}

fn hours(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
