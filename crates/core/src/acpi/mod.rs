pub mod adapter;
pub mod battery;
pub mod fan;
pub mod thermal;

use crate::{
    config::Config,
    error::{AcpiError, Result},
    model::{
        AcpiReport, Adapter, Battery, CoolingMode, Fan, FanState, GlobalSnapshot, PowerState,
        ThermalState, ThermalZone, DISABLED, NOT_SUPPORTED,
    },
    platform::{AcpiSource, ProcFs},
    scan,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of each category's discovery, as returned by [`AcpiCollector::init_all`]
#[derive(Debug)]
pub struct InitStatus {
    pub batteries: Result<()>,
    pub thermal: Result<()>,
    pub fans: Result<()>,
    pub adapter: Result<()>,
}

/// Owns the discovered records and refreshes them from an [`AcpiSource`].
///
/// Every collection holds at most `max_items` records. Indices are stable until
/// the category is initialised again.
pub struct AcpiCollector<S = ProcFs> {
    source: S,
    max_items: usize,
    min_version: i64,
    global: GlobalSnapshot,
    batteries: Vec<Battery>,
    thermal_zones: Vec<ThermalZone>,
    fans: Vec<Fan>,
}

impl AcpiCollector<ProcFs> {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_source(ProcFs::from_config(config), config))
    }
}

impl<S: AcpiSource> AcpiCollector<S> {
    pub fn with_source(source: S, config: &Config) -> Self {
        Self {
            source,
            max_items: config.max_items,
            min_version: config.min_acpi_version,
            global: GlobalSnapshot::default(),
            batteries: Vec::new(),
            thermal_zones: Vec::new(),
            fans: Vec::new(),
        }
    }

    /// Report the interface version, or `Unsupported` when the host has no
    /// ACPI data or only a version older than the configured minimum.
    pub fn check_support(&self) -> Result<i64> {
        let version = self.acpi_version()?;

        if version < self.min_version {
            return Err(AcpiError::unsupported(format!(
                "ACPI version {} is older than {}",
                version, self.min_version
            )));
        }

        debug!(version, "ACPI supported");
        Ok(version)
    }

    fn acpi_version(&self) -> Result<i64> {
        let info = self.source.resolve("info");

        match self.source.read_text(&info) {
            Ok(buf) => scan::scan_value(&buf, "version:")
                .map(|v| i64::from(scan::parse_int(&v)))
                .ok_or_else(|| AcpiError::unsupported(format!("no version in {}", info.display()))),
            Err(e) => {
                debug!("{}: {}, trying the sysfs version file", info.display(), e);
                let path = self.source.version_file();
                let buf = self
                    .source
                    .read_text(path)
                    .map_err(|e| AcpiError::unsupported(format!("{}: {}", path.display(), e)))?;
                Ok(i64::from(scan::parse_int(&buf)))
            }
        }
    }

    /// List a category, enforcing the capacity bound.
    fn discover(&self, category: &'static str, allow_empty: bool) -> Result<Vec<String>> {
        let names = self.source.list_dir(category).map_err(|e| {
            AcpiError::unsupported(format!("{}: {}", self.source.resolve(category).display(), e))
        })?;

        if names.is_empty() && !allow_empty {
            return Err(AcpiError::unsupported(format!("no {} entries", category)));
        }

        if names.len() > self.max_items {
            warn!(
                category,
                found = names.len(),
                capacity = self.max_items,
                "too many ACPI objects"
            );
            return Err(AcpiError::item_limit(category, names.len(), self.max_items));
        }

        Ok(names)
    }

    /// Find the batteries, fix their file paths and read the static info.
    ///
    /// Batteries are ordered by name so indices are reproducible.
    pub fn init_batteries(&mut self) -> Result<()> {
        self.batteries.clear();
        self.global.battery_count = 0;

        let mut names = self.discover("battery", false)?;
        names.sort();

        let mut batteries = reserve(names.len(), "batteries")?;
        let dir = self.source.resolve("battery");
        for name in names {
            let path = dir.join(&name);
            let mut battery = Battery::new(name, path);

            if let Err(e) = read_info(&self.source, &mut battery) {
                debug!(battery = %battery.name, "info: {}", e);
            }
            if let Err(e) = read_alarm(&self.source, &mut battery) {
                debug!(battery = %battery.name, "alarm: {}", e);
            }
            batteries.push(battery);
        }

        self.global.battery_count = batteries.len();
        self.batteries = batteries;
        info!(count = self.global.battery_count, "batteries discovered");
        Ok(())
    }

    /// Find the AC adapter and read its state. Only the first one counts.
    pub fn init_adapter(&mut self) -> Result<()> {
        self.global.adapter = Adapter::default();

        let mut names = self.discover_adapter()?;
        names.sort();
        let name = names.remove(0);

        let path = self.source.resolve("ac_adapter").join(&name);
        self.global.adapter = Adapter::new(name, path);
        self.read_adapter()
    }

    fn discover_adapter(&self) -> Result<Vec<String>> {
        let names = self.source.list_dir("ac_adapter").map_err(|e| {
            AcpiError::unsupported(format!("{}: {}", self.source.resolve("ac_adapter").display(), e))
        })?;

        if names.is_empty() {
            return Err(AcpiError::unsupported("no ac_adapter entries"));
        }
        Ok(names)
    }

    /// Find the thermal zones and read each once. A tree without zones is not
    /// an error.
    pub fn init_thermal(&mut self) -> Result<()> {
        self.thermal_zones.clear();
        self.global.thermal_count = 0;
        self.global.temperature = NOT_SUPPORTED;

        let names = self.discover("thermal_zone", true)?;

        let mut zones = reserve(names.len(), "thermal zones")?;
        let dir = self.source.resolve("thermal_zone");
        for name in names {
            let path = dir.join(&name);
            zones.push(ThermalZone::new(name, path));
        }

        self.global.thermal_count = zones.len();
        self.thermal_zones = zones;
        info!(count = self.global.thermal_count, "thermal zones discovered");

        for index in 0..self.thermal_zones.len() {
            self.read_zone(index)?;
        }
        Ok(())
    }

    /// Find the fans and read each once.
    pub fn init_fans(&mut self) -> Result<()> {
        self.fans.clear();
        self.global.fan_count = 0;

        let names = self.discover("fan", false)?;

        let mut fans = reserve(names.len(), "fans")?;
        let dir = self.source.resolve("fan");
        for name in names {
            let path = dir.join(&name);
            fans.push(Fan::new(name, path));
        }

        self.global.fan_count = fans.len();
        self.fans = fans;
        info!(count = self.global.fan_count, "fans discovered");

        for index in 0..self.fans.len() {
            if let Err(e) = self.read_fan(index) {
                debug!(fan = %self.fans[index].name, "{}", e);
            }
        }
        Ok(())
    }

    /// Run every discovery, independently of each other.
    pub fn init_all(&mut self) -> InitStatus {
        InitStatus {
            batteries: self.init_batteries(),
            thermal: self.init_thermal(),
            fans: self.init_fans(),
            adapter: self.init_adapter(),
        }
    }

    /// Refresh the dynamic state, alarm and derived values of one battery.
    ///
    /// A removed battery returns `NotPresent` and keeps its last values apart
    /// from the presence flag.
    pub fn read_battery(&mut self, index: usize) -> Result<()> {
        let count = self.batteries.len();
        let battery = self
            .batteries
            .get_mut(index)
            .ok_or_else(|| AcpiError::item_limit("batteries", index + 1, count))?;

        read_state(&self.source, battery)?;
        if let Err(e) = read_alarm(&self.source, battery) {
            debug!(battery = %battery.name, "alarm: {}", e);
        }
        battery.refresh_derived();

        Ok(())
    }

    /// Re-read the static info of one battery, e.g. after it was inserted.
    pub fn read_battery_info(&mut self, index: usize) -> Result<()> {
        let count = self.batteries.len();
        let battery = self
            .batteries
            .get_mut(index)
            .ok_or_else(|| AcpiError::item_limit("batteries", index + 1, count))?;

        read_info(&self.source, battery)
    }

    pub fn read_adapter(&mut self) -> Result<()> {
        let adapter = &mut self.global.adapter;
        if adapter.name.is_empty() {
            return Err(AcpiError::unsupported("no AC adapter"));
        }

        adapter.state = match self.source.read_text(&adapter.state_file) {
            Ok(buf) => adapter::parse_state(&buf),
            Err(e) => {
                debug!("{}: {}", adapter.state_file.display(), e);
                PowerState::Error
            }
        };

        Ok(())
    }

    /// Refresh one thermal zone. Each file is read on its own and a failure
    /// only resets the field it feeds.
    pub fn read_zone(&mut self, index: usize) -> Result<()> {
        let count = self.thermal_zones.len();
        let zone = self
            .thermal_zones
            .get_mut(index)
            .ok_or_else(|| AcpiError::item_limit("thermal zones", index + 1, count))?;

        zone.state = read_optional(&self.source, &zone.state_file)
            .map(|buf| thermal::parse_state(&buf))
            .unwrap_or(ThermalState::Error);

        let temperature =
            read_optional(&self.source, &zone.temp_file).and_then(|buf| thermal::parse_temperature(&buf));
        zone.temperature = temperature.unwrap_or(NOT_SUPPORTED);
        if let Some(temperature) = temperature {
            if count == 1 {
                self.global.temperature = temperature;
            }
        }

        zone.cooling_mode = read_optional(&self.source, &zone.cooling_file)
            .map(|buf| thermal::parse_cooling_mode(&buf))
            .unwrap_or(CoolingMode::Error);

        zone.frequency = read_optional(&self.source, &zone.freq_file)
            .map(|buf| thermal::parse_polling_frequency(&buf))
            .unwrap_or(DISABLED);

        Ok(())
    }

    pub fn read_fan(&mut self, index: usize) -> Result<()> {
        let count = self.fans.len();
        let fan = self
            .fans
            .get_mut(index)
            .ok_or_else(|| AcpiError::item_limit("fans", index + 1, count))?;

        match read_optional(&self.source, &fan.state_file).and_then(|buf| fan::parse_state(&buf)) {
            Some(state) => {
                fan.state = state;
                Ok(())
            }
            None => {
                fan.state = FanState::Error;
                Err(AcpiError::unsupported(format!("no fan status for {}", fan.name)))
            }
        }
    }

    /// Refresh every known object, logging the ones that fail.
    pub fn refresh_all(&mut self) {
        for index in 0..self.batteries.len() {
            if let Err(e) = self.read_battery(index) {
                debug!(battery = %self.batteries[index].name, "{}", e);
            }
        }
        for index in 0..self.thermal_zones.len() {
            if let Err(e) = self.read_zone(index) {
                debug!(zone = %self.thermal_zones[index].name, "{}", e);
            }
        }
        for index in 0..self.fans.len() {
            if let Err(e) = self.read_fan(index) {
                debug!(fan = %self.fans[index].name, "{}", e);
            }
        }
        if let Err(e) = self.read_adapter() {
            debug!("adapter: {}", e);
        }
    }

    pub fn report(&self) -> AcpiReport {
        AcpiReport {
            global: self.global.clone(),
            batteries: self.batteries.clone(),
            thermal_zones: self.thermal_zones.clone(),
            fans: self.fans.clone(),
        }
    }

    pub fn global(&self) -> &GlobalSnapshot {
        &self.global
    }

    pub fn adapter(&self) -> &Adapter {
        &self.global.adapter
    }

    pub fn batteries(&self) -> &[Battery] {
        &self.batteries
    }

    pub fn battery(&self, index: usize) -> Option<&Battery> {
        self.batteries.get(index)
    }

    pub fn thermal_zones(&self) -> &[ThermalZone] {
        &self.thermal_zones
    }

    pub fn fans(&self) -> &[Fan] {
        &self.fans
    }
}

fn reserve<T>(count: usize, category: &str) -> Result<Vec<T>> {
    let mut records = Vec::new();
    records
        .try_reserve_exact(count)
        .map_err(|e| AcpiError::allocation(format!("{} {}: {}", count, category, e)))?;
    Ok(records)
}

fn read_optional<S: AcpiSource>(source: &S, path: &Path) -> Option<String> {
    match source.read_text(path) {
        Ok(buf) => Some(buf),
        Err(e) => {
            debug!("{}: {}", path.display(), e);
            None
        }
    }
}

fn read_required<S: AcpiSource>(source: &S, path: &Path) -> Result<String> {
    source
        .read_text(path)
        .map_err(|e| AcpiError::unsupported(format!("{}: {}", path.display(), e)))
}

fn read_info<S: AcpiSource>(source: &S, battery: &mut Battery) -> Result<()> {
    let buf = read_required(source, &battery.info_file)?;
    battery::parse_info(&buf, battery)
}

fn read_state<S: AcpiSource>(source: &S, battery: &mut Battery) -> Result<()> {
    let buf = read_required(source, &battery.state_file)?;
    battery::parse_state(&buf, battery)
}

fn read_alarm<S: AcpiSource>(source: &S, battery: &mut Battery) -> Result<()> {
    let buf = read_required(source, &battery.alarm_file)?;
    battery::parse_alarm(&buf, battery);
    Ok(())
}
