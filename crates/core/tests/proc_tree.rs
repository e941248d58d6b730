use acpistat_core::{
    AcpiCollector, AcpiError, BatteryLevel, ChargeState, Config, CoolingMode, FanState, PowerState,
    ThermalState, DISABLED, NOT_SUPPORTED,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn laptop_tree() -> TempDir {
    let td = TempDir::new().unwrap();
    let root = td.path();

    write(root, "info", "version:                 20070126\n");
    write(root, "ac_adapter/AC/state", "state:                   off-line\n");
    write(
        root,
        "battery/BAT0/info",
        "present:                 yes\n\
         design capacity:         5200 mAh\n\
         last full capacity:      4800 mAh\n\
         battery technology:      rechargeable\n\
         design voltage:          10800 mV\n\
         design capacity warning: 480 mAh\n\
         design capacity low:     200 mAh\n\
         capacity granularity 1:  100 mAh\n\
         capacity granularity 2:  100 mAh\n",
    );
    write(
        root,
        "battery/BAT0/state",
        "present:                 yes\n\
         capacity state:          ok\n\
         charging state:          discharging\n\
         present rate:            1200 mA\n\
         remaining capacity:      1000 mAh\n\
         present voltage:         11100 mV\n",
    );
    write(root, "battery/BAT0/alarm", "alarm:                   480 mAh\n");
    write(root, "battery/BAT1/info", "present:                 no\n");
    write(root, "battery/BAT1/state", "present:                 no\n");
    write(root, "thermal_zone/THM/state", "state:                   passive\n");
    write(root, "thermal_zone/THM/temperature", "temperature:             71 C\n");
    write(root, "thermal_zone/THM/cooling_mode", "cooling mode:   passive\n");
    write(root, "thermal_zone/THM/polling_frequency", "polling frequency:       10 seconds\n");
    write(root, "fan/FAN0/state", "status:                  on\n");

    td
}

fn collector(root: &Path) -> AcpiCollector {
    let config = Config {
        acpi_root: root.to_path_buf(),
        acpica_version_file: root.join("missing_acpica_version"),
        ..Config::default()
    };
    AcpiCollector::new(&config).unwrap()
}

#[test]
fn full_snapshot_from_proc_tree() {
    let td = laptop_tree();
    let mut acpi = collector(td.path());

    assert_eq!(acpi.check_support().unwrap(), 20070126);

    let status = acpi.init_all();
    assert!(status.batteries.is_ok());
    assert!(status.thermal.is_ok());
    assert!(status.fans.is_ok());
    assert!(status.adapter.is_ok());

    acpi.read_battery(0).unwrap();
    assert!(matches!(acpi.read_battery(1), Err(AcpiError::NotPresent(_))));

    let report = acpi.report();
    assert_eq!(report.global.battery_count, 2);
    assert_eq!(report.global.adapter.state, PowerState::Battery);

    let bat = &report.batteries[0];
    assert_eq!(bat.name, "BAT0");
    assert!(bat.present);
    assert_eq!(bat.design_cap, 5200);
    assert_eq!(bat.alarm, 480);
    assert_eq!(bat.charge_state, ChargeState::Discharging);
    assert_eq!(bat.percentage, 21);
    assert_eq!(bat.remaining_time, 50);
    assert_eq!(bat.charge_time, 0);
    // med = 1200, warn = 480
    assert_eq!(bat.level, BatteryLevel::Low);

    assert!(!report.batteries[1].present);
    assert_eq!(report.batteries[1].design_cap, NOT_SUPPORTED);

    let zone = &report.thermal_zones[0];
    assert_eq!(zone.state, ThermalState::Passive);
    assert_eq!(zone.temperature, 71);
    assert_eq!(zone.cooling_mode, CoolingMode::Passive);
    assert_eq!(zone.frequency, 10);
    assert_eq!(report.global.temperature, 71);

    assert_eq!(report.fans[0].state, FanState::On);
}

#[test]
fn missing_zone_files_degrade_per_field() {
    let td = TempDir::new().unwrap();
    write(td.path(), "thermal_zone/TZ0/temperature", "temperature:             45 C\n");

    let mut acpi = collector(td.path());
    acpi.init_thermal().unwrap();

    let zone = &acpi.thermal_zones()[0];
    assert_eq!(zone.state, ThermalState::Error);
    assert_eq!(zone.cooling_mode, CoolingMode::Error);
    assert_eq!(zone.frequency, DISABLED);
    assert_eq!(zone.temperature, 45);
}

#[test]
fn battery_removed_between_reads() {
    let td = laptop_tree();
    let mut acpi = collector(td.path());
    acpi.init_batteries().unwrap();
    acpi.read_battery(0).unwrap();

    write(td.path(), "battery/BAT0/state", "present:                 no\n");
    assert!(matches!(acpi.read_battery(0), Err(AcpiError::NotPresent(_))));

    let bat = acpi.battery(0).unwrap();
    assert!(!bat.present);
    assert_eq!(bat.last_full_cap, 4800);
    assert_eq!(bat.design_warn, 480);
}

#[test]
fn too_many_fans() {
    let td = TempDir::new().unwrap();
    for i in 0..3 {
        write(td.path(), &format!("fan/FAN{i}/state"), "status: on\n");
    }

    let config = Config {
        acpi_root: td.path().to_path_buf(),
        max_items: 2,
        ..Config::default()
    };
    let mut acpi = AcpiCollector::new(&config).unwrap();

    assert!(matches!(
        acpi.init_fans(),
        Err(AcpiError::ItemLimitExceeded {
            found: 3,
            capacity: 2,
            ..
        })
    ));
    assert!(acpi.fans().is_empty());
    assert_eq!(acpi.global().fan_count, 0);
}

#[test]
fn no_acpi_tree_is_unsupported() {
    let td = TempDir::new().unwrap();
    let mut acpi = collector(td.path());

    assert!(acpi.check_support().unwrap_err().is_unsupported());
    let status = acpi.init_all();
    assert!(status.batteries.unwrap_err().is_unsupported());
    assert!(status.thermal.unwrap_err().is_unsupported());
    assert!(status.fans.unwrap_err().is_unsupported());
    assert!(status.adapter.unwrap_err().is_unsupported());
}
