pub use linear_regression::{FitError, LinearRegressor, LinearRegressorOptions, PredictError};
pub use query::Query;
pub use space::FeatureSpace;
pub use table::{Table, TableError};

pub mod dataset;

mod functions;
mod linear_regression;
mod query;
mod space;
mod table;
