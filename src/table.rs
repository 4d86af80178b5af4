//! Tabular view of located devices for spreadsheet or CSV exporters.

use crate::operations::devices::Device;

/// Column headers, in cell order.
pub const HEADERS: [&str; 8] = [
    "Index",
    "Name",
    "Station",
    "Side",
    "Classification",
    "Offset (m)",
    "X",
    "Y",
];

/// One table row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceRow {
    pub index: usize,
    pub name: String,
    /// `K<km>+<m>` label.
    pub station: String,
    pub side: String,
    /// Empty when the device was not classified.
    pub classification: String,
    /// Rounded to millimetres.
    pub offset: f64,
    pub x: f64,
    pub y: f64,
}

impl DeviceRow {
    /// Cell texts in [`HEADERS`] order.
    #[must_use]
    pub fn cells(&self) -> [String; 8] {
        [
            self.index.to_string(),
            self.name.clone(),
            self.station.clone(),
            self.side.clone(),
            self.classification.clone(),
            format!("{:.3}", self.offset),
            format!("{:.3}", self.x),
            format!("{:.3}", self.y),
        ]
    }
}

impl From<&Device> for DeviceRow {
    fn from(device: &Device) -> Self {
        Self {
            index: device.index,
            name: device.display_name.clone(),
            station: device.station_label.clone(),
            side: device.side.to_string(),
            classification: device.classification.clone().unwrap_or_default(),
            offset: round3(device.offset),
            x: round3(device.position.x),
            y: round3(device.position.y),
        }
    }
}

/// Rows for a device list, in the list's order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceTable {
    rows: Vec<DeviceRow>,
}

impl DeviceTable {
    /// Builds the table. An empty device list gives an empty table and a
    /// warning, since there is nothing worth exporting.
    #[must_use]
    pub fn new(devices: &[Device]) -> Self {
        if devices.is_empty() {
            tracing::warn!("no devices to tabulate");
        }
        Self {
            rows: devices.iter().map(DeviceRow::from).collect(),
        }
    }

    #[must_use]
    pub fn headers(&self) -> &'static [&'static str] {
        &HEADERS
    }

    #[must_use]
    pub fn rows(&self) -> &[DeviceRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
