use crate::functions;
use crate::query::Query;
use crate::table::{Table, TableError};
use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Fit options.
///
/// `tolerance` is the singular value cutoff of the least squares solve:
/// singular values below it are treated as zero, which makes the fit a
/// minimum-norm solution whenever the design matrix is rank deficient or has
/// fewer rows than columns.
#[derive(Debug, Clone)]
pub struct LinearRegressorOptions {
    tolerance: f64,
}

impl LinearRegressorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn fit(self, table: &Table) -> Result<LinearRegressor, FitError> {
        for (i, name) in table.names().iter().enumerate() {
            let column = table.column(i);
            if column.iter().all(|&v| v == column[0]) {
                return Err(FitError::ZeroVarianceFeature {
                    name: (*name).to_owned(),
                });
            }
        }

        let rows = table.rows_len();
        let columns = table.features_len() + 1;

        // Design matrix: a constant column for the intercept, then the
        // feature columns in declared order.
        let design = DMatrix::from_fn(rows, columns, |r, c| {
            if c == 0 {
                1.0
            } else {
                table.column(c - 1)[r]
            }
        });
        let target = DVector::from_column_slice(table.target());

        let svd = design.clone().svd(true, true);
        let beta = svd
            .solve(&target, self.tolerance)
            .map_err(|_| FitError::Degenerate)?;
        if beta.iter().any(|v| !v.is_finite()) {
            return Err(FitError::Degenerate);
        }

        let fitted = (&design * &beta).iter().copied().collect::<Vec<_>>();
        let residuals = fitted
            .iter()
            .zip(table.target())
            .map(|(f, y)| y - f)
            .collect::<Vec<_>>();

        let target_mean = functions::mean(table.target().iter().copied());
        let ss_res = functions::sum_of_squares(residuals.iter().copied(), 0.0);
        let ss_tot = functions::sum_of_squares(table.target().iter().copied(), target_mean);
        let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

        Ok(LinearRegressor {
            names: table.names().iter().map(|n| (*n).to_owned()).collect(),
            coefficients: beta.iter().copied().collect(),
            fitted,
            residuals,
            r_squared,
        })
    }
}

impl Default for LinearRegressorOptions {
    fn default() -> Self {
        Self { tolerance: 1e-10 }
    }
}

/// An ordinary least squares model: the coefficient vector (intercept first,
/// then one coefficient per feature in declared order) plus training fit
/// diagnostics. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    names: Vec<String>,
    coefficients: Vec<f64>,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
    r_squared: f64,
}

impl LinearRegressor {
    pub fn fit(table: &Table) -> Result<Self, FitError> {
        LinearRegressorOptions::default().fit(table)
    }

    /// Intercept plus the weighted sum of the query's feature values, matched
    /// by name in the order the model was fitted with. Values outside the
    /// training ranges are extrapolated silently.
    pub fn predict(&self, query: &Query) -> Result<f64, PredictError> {
        let mut value = self.coefficients[0];
        for (name, coefficient) in self.names.iter().zip(&self.coefficients[1..]) {
            let x = query.get(name).ok_or_else(|| PredictError::MissingFeature {
                name: name.clone(),
            })?;
            value += coefficient * x;
        }
        Ok(value)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.names
    }

    /// Intercept first, then one coefficient per feature.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

#[non_exhaustive]
#[derive(Debug, Error, Clone)]
pub enum FitError {
    #[error("feature {name:?} has zero variance, making the design matrix singular")]
    ZeroVarianceFeature { name: String },

    #[error("the least squares system is degenerate and cannot be solved")]
    Degenerate,

    #[error("features and target must have one or more rows")]
    EmptyRows,

    #[error("some of features or target have a different row count from others")]
    RowSizeMismatch,

    #[error("feature names and feature columns must have the same count")]
    SchemaSizeMismatch,

    #[error("target contains non finite numbers")]
    NonFiniteTarget,
}

impl From<TableError> for FitError {
    fn from(f: TableError) -> Self {
        match f {
            TableError::EmptyTable => Self::EmptyRows,
            TableError::RowSizeMismatch => Self::RowSizeMismatch,
            TableError::SchemaSizeMismatch => Self::SchemaSizeMismatch,
            TableError::NonFiniteTarget => Self::NonFiniteTarget,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error, Clone)]
pub enum PredictError {
    #[error("query is missing a value for feature {name:?}")]
    MissingFeature { name: String },
}
