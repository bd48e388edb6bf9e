//! Built-in agronomic samples: five crop seasons of yield observations and
//! five scouting records of pest incidence. Both schemas are fixed at build
//! time.

use crate::linear_regression::{FitError, LinearRegressor};
use crate::query::Query;
use crate::table::{Table, TableError};

/// Bounds and default for one user-adjustable input, matching the controls of
/// the interactive front end.
#[derive(Debug, Clone, Copy)]
pub struct InputRange {
    pub name: &'static str,
    pub low: f64,
    pub high: f64,
    pub default: f64,
}

/// A fixed 5-row, 5-feature observation sample with its target column.
#[derive(Debug, Clone)]
pub struct SampleTable {
    target_name: &'static str,
    inputs: [InputRange; 5],
    columns: [[f64; 5]; 5],
    target: [f64; 5],
}

impl SampleTable {
    pub fn table(&self) -> Result<Table<'_>, TableError> {
        Table::new(
            self.inputs.iter().map(|i| i.name).collect(),
            self.columns.iter().map(|c| &c[..]).collect(),
            &self.target,
        )
    }

    pub fn fit(&self) -> Result<LinearRegressor, FitError> {
        let table = self.table()?;
        LinearRegressor::fit(&table)
    }

    pub fn target_name(&self) -> &'static str {
        self.target_name
    }

    pub fn inputs(&self) -> &[InputRange] {
        &self.inputs
    }

    /// A query with every input at its default value.
    pub fn default_query(&self) -> Query {
        self.inputs
            .iter()
            .fold(Query::new(), |q, i| q.set(i.name, i.default))
    }
}

/// Crop yield (kg/ha) against resource allocation and conditions.
pub const CROP_YIELD: SampleTable = SampleTable {
    target_name: "Yield",
    inputs: [
        InputRange {
            name: "Fertilizer",
            low: 80.0,
            high: 150.0,
            default: 110.0,
        },
        InputRange {
            name: "Irrigation",
            low: 4000.0,
            high: 6000.0,
            default: 5200.0,
        },
        InputRange {
            name: "Labor",
            low: 150.0,
            high: 250.0,
            default: 210.0,
        },
        InputRange {
            name: "SoilQuality",
            low: 5.0,
            high: 9.0,
            default: 7.5,
        },
        InputRange {
            name: "WeatherIndex",
            low: 60.0,
            high: 80.0,
            default: 72.0,
        },
    ],
    columns: [
        [100.0, 120.0, 90.0, 110.0, 130.0],
        [5000.0, 5500.0, 4500.0, 5200.0, 5700.0],
        [200.0, 220.0, 190.0, 210.0, 230.0],
        [7.0, 8.0, 6.5, 7.5, 8.5],
        [70.0, 75.0, 65.0, 72.0, 78.0],
    ],
    target: [3000.0, 3200.0, 2900.0, 3100.0, 3300.0],
};

/// Pest incidence (pests/m²) against environment and spray history.
pub const PEST_INCIDENCE: SampleTable = SampleTable {
    target_name: "PestIncidence",
    inputs: [
        InputRange {
            name: "Temperature",
            low: 25.0,
            high: 35.0,
            default: 29.0,
        },
        InputRange {
            name: "Humidity",
            low: 50.0,
            high: 80.0,
            default: 64.0,
        },
        InputRange {
            name: "CropStage",
            low: 1.0,
            high: 3.0,
            default: CropStage::Vegetative.encode(),
        },
        InputRange {
            name: "Pesticide",
            low: 0.0,
            high: 1.0,
            default: 1.0,
        },
        InputRange {
            name: "TimeSinceSpray",
            low: 0.0,
            high: 15.0,
            default: 6.0,
        },
    ],
    columns: [
        [28.0, 30.0, 27.0, 29.0, 31.0],
        [60.0, 65.0, 55.0, 62.0, 68.0],
        [1.0, 2.0, 1.0, 2.0, 3.0],
        [1.0, 0.0, 1.0, 0.0, 1.0],
        [5.0, 10.0, 3.0, 7.0, 2.0],
    ],
    target: [15.0, 20.0, 10.0, 18.0, 25.0],
};

/// Growth stage of the crop, with the numeric encoding the pest model was
/// trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropStage {
    Vegetative,
    Flowering,
    Fruiting,
}

impl CropStage {
    pub const fn encode(self) -> f64 {
        match self {
            Self::Vegetative => 1.0,
            Self::Flowering => 2.0,
            Self::Fruiting => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Vegetative => "vegetative",
            Self::Flowering => "flowering",
            Self::Fruiting => "fruiting",
        }
    }
}

/// Encoding of the "was pesticide recently applied?" flag.
pub fn encode_pesticide(applied: bool) -> f64 {
    if applied {
        1.0
    } else {
        0.0
    }
}
