// Data structures for generated usage series

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::constants::*;

/// Observation window selected by the `duration` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "hr")]
    Hour,
    #[serde(rename = "wk")]
    Week,
}

impl Window {
    pub const ALL: [Window; 2] = [Window::Hour, Window::Week];

    pub fn from_param(val: &str) -> Option<Self> {
        match val {
            "hr" => Some(Window::Hour),
            "wk" => Some(Window::Week),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Window::Hour => "hr",
            Window::Week => "wk",
        }
    }

    pub fn duration_secs(self) -> u32 {
        match self {
            Window::Hour => HOUR_DURATION_SECS,
            Window::Week => WEEK_DURATION_SECS,
        }
    }

    pub fn interval_secs(self) -> u32 {
        match self {
            Window::Hour => HOUR_INTERVAL_SECS,
            Window::Week => WEEK_INTERVAL_SECS,
        }
    }

    /// Number of samples in every series generated for this window.
    pub fn sample_count(self) -> usize {
        (self.duration_secs() / self.interval_secs()) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
    Disk,
    Memory,
    Network,
}

impl Device {
    pub const ALL: [Device; 4] = [Device::Cpu, Device::Disk, Device::Memory, Device::Network];

    pub fn from_param(val: &str) -> Option<Self> {
        match val {
            "cpu" => Some(Device::Cpu),
            "disk" => Some(Device::Disk),
            "memory" => Some(Device::Memory),
            "network" => Some(Device::Network),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Disk => "disk",
            Device::Memory => "memory",
            Device::Network => "network",
        }
    }

    // Disk fills up over time
    pub fn drifts_upward(self) -> bool {
        matches!(self, Device::Disk)
    }
}

/// Largest allowed fall and rise between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBounds {
    pub down: u8,
    pub up: u8,
}

impl StepBounds {
    pub fn for_mode(window: Window, drift_upward: bool) -> Self {
        let (down, up) = match (drift_upward, window) {
            (false, _) => SYMMETRIC_STEP,
            (true, Window::Hour) => UPWARD_STEP_HOUR,
            (true, Window::Week) => UPWARD_STEP_WEEK,
        };
        Self { down, up }
    }

    /// Inclusive range the sample following `prev` is drawn from.
    pub fn next_range(&self, prev: u8) -> (u8, u8) {
        let low = prev.saturating_sub(self.down);
        let high = prev.saturating_add(self.up).min(USAGE_MAX);
        (low, high)
    }

    pub fn allows(&self, prev: u8, next: u8) -> bool {
        let (low, high) = self.next_range(prev);
        (low..=high).contains(&next)
    }
}

/// One reading: seconds since the window start and a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub toffset: u32,
    pub usage: u8,
}

pub type Series = Vec<Sample>;

/// Device name to generated series, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UsageReport {
    series: HashMap<Device, Series>,
}

impl UsageReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            series: HashMap::with_capacity(cap),
        }
    }

    pub fn contains(&self, device: Device) -> bool {
        self.series.contains_key(&device)
    }

    pub fn insert(&mut self, device: Device, series: Series) {
        self.series.insert(device, series);
    }

    pub fn get(&self, device: Device) -> Option<&Series> {
        self.series.get(&device)
    }

    pub fn devices(&self) -> impl Iterator<Item = Device> + '_ {
        self.series.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
