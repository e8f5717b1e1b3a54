use super::SourceIndices;
use crate::base::Config;
use crate::StrError;
use russell_lab::Complex64;

/// Defines the interface to an external frequency-domain forward solver
///
/// Implementations discretize Maxwell's equations over the mesh that produced
/// the sample points, factorize, and back-substitute; none of that happens in
/// this crate. The contract here is purely about shapes: the solver receives
/// one conductivity value per sample and must return one complex field value
/// per sample.
pub trait ForwardSolver {
    /// Solves one frequency
    ///
    /// # Input
    ///
    /// * `sigma` -- conductivity field, one value per sample
    /// * `source` -- sample indices of the source electrodes
    /// * `current` -- injected current [A]
    /// * `frequency` -- frequency of the harmonic source [Hz]
    ///
    /// # Output
    ///
    /// Returns one complex field value per sample (same order as `sigma`).
    fn solve(
        &mut self,
        sigma: &[f64],
        source: &SourceIndices,
        current: f64,
        frequency: f64,
    ) -> Result<Vec<Complex64>, StrError>;
}

/// Holds the solver results of one model at all configured frequencies
pub struct FdemResults {
    /// Model name (e.g., "intact" or "gaps")
    pub name: String,

    /// Frequencies [Hz] in run order
    pub frequencies: Vec<f64>,

    /// One complex field (one value per sample) per frequency
    pub fields: Vec<Vec<Complex64>>,
}

/// Runs the frequency sweep of the forward simulation through an external solver
pub struct FdemRun<'a> {
    /// Run configuration (frequencies, source current)
    config: &'a Config,

    /// Sample indices of the source electrodes
    source: &'a SourceIndices,
}

impl<'a> FdemRun<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config, source: &'a SourceIndices) -> Self {
        FdemRun { config, source }
    }

    /// Runs all configured frequencies for one named conductivity model
    ///
    /// The solver output length is checked against the conductivity field
    /// length at every frequency; a mismatch aborts the sweep.
    pub fn run(&self, name: &str, sigma: &[f64], solver: &mut dyn ForwardSolver) -> Result<FdemResults, StrError> {
        if sigma.is_empty() {
            return Err("conductivity field must not be empty");
        }
        let mut fields = Vec::with_capacity(self.config.frequencies.len());
        for frequency in &self.config.frequencies {
            let field = solver.solve(sigma, self.source, self.config.source_current, *frequency)?;
            if field.len() != sigma.len() {
                return Err("solver output length must match the conductivity field length");
            }
            fields.push(field);
        }
        Ok(FdemResults {
            name: name.to_string(),
            frequencies: self.config.frequencies.clone(),
            fields,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
