use agrolin::dataset::{SampleTable, CROP_YIELD, PEST_INCIDENCE};
use agrolin::FeatureSpace;
use anyhow::anyhow;
use itertools::Itertools as _;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read as _;
use std::str::FromStr;
use structopt::StructOpt;

#[derive(Debug, Clone, Copy)]
enum Model {
    Yield,
    Pest,
}

impl Model {
    fn sample(self) -> &'static SampleTable {
        match self {
            Self::Yield => &CROP_YIELD,
            Self::Pest => &PEST_INCIDENCE,
        }
    }
}

impl FromStr for Model {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yield" => Ok(Self::Yield),
            "pest" => Ok(Self::Pest),
            _ => Err(anyhow!("unknown model {:?} (expected \"yield\" or \"pest\")", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
struct Opt {
    /// Model to query: "yield" or "pest".
    #[structopt(long, default_value = "yield")]
    model: Model,
}

#[derive(Debug, Serialize)]
struct FeatureReport {
    coefficient: f64,
    observed_low: f64,
    observed_high: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    target: &'static str,
    prediction: f64,
    intercept: f64,
    r_squared: f64,
    features: BTreeMap<String, FeatureReport>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    let sample = opt.model.sample();

    // Query values come as a JSON object on stdin; inputs the caller leaves
    // out fall back to the control defaults.
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;
    let values: BTreeMap<String, f64> = if input.trim().is_empty() {
        BTreeMap::new()
    } else {
        serde_json::from_str(&input)?
    };

    let mut query = sample.default_query();
    for (name, value) in &values {
        query = query.set(name, *value);
    }

    let table = sample.table()?;
    let space = FeatureSpace::from_table(&table);
    let regressor = agrolin::LinearRegressor::fit(&table)?;
    let prediction = regressor.predict(&query)?;

    let features = regressor
        .feature_names()
        .iter()
        .zip_eq(&regressor.coefficients()[1..])
        .zip_eq(space.ranges())
        .map(|((name, &coefficient), range)| {
            (
                name.clone(),
                FeatureReport {
                    coefficient,
                    observed_low: range.start,
                    observed_high: range.end,
                },
            )
        })
        .collect();

    let report = Report {
        target: sample.target_name(),
        prediction,
        intercept: regressor.intercept(),
        r_squared: regressor.r_squared(),
        features,
    };
    serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
    println!();

    Ok(())
}
