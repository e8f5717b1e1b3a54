use crate::base::DEFAULT_OUT_DIR;
use crate::StrError;
use std::fmt;

/// Holds configuration data for a forward-modelling run
pub struct Config {
    /// Frequencies of the harmonic source [Hz]
    pub frequencies: Vec<f64>,

    /// Current injected by the source [A]
    pub source_current: f64,

    /// Directory where result files are saved
    pub out_dir: String,
}

impl Config {
    /// Allocates a new instance
    pub fn new() -> Self {
        Config {
            frequencies: vec![1.0],
            source_current: 1.0,
            out_dir: String::from(DEFAULT_OUT_DIR),
        }
    }

    /// Sets the frequencies of the harmonic source
    pub fn set_frequencies(&mut self, values: &[f64]) -> Result<&mut Self, StrError> {
        if values.is_empty() {
            return Err("at least one frequency is required");
        }
        for f in values {
            if *f <= 0.0 {
                return Err("frequencies must be > 0.0");
            }
        }
        self.frequencies = values.to_vec();
        Ok(self)
    }

    /// Sets the current injected by the source
    pub fn set_source_current(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("source current must be > 0.0");
        }
        self.source_current = value;
        Ok(self)
    }

    /// Sets the directory where result files are saved
    pub fn set_out_dir(&mut self, path: &str) -> Result<&mut Self, StrError> {
        if path.is_empty() {
            return Err("output directory must not be empty");
        }
        self.out_dir = String::from(path);
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "frequencies = {:?}\n", self.frequencies).unwrap();
        write!(f, "source_current = {:?}\n", self.source_current).unwrap();
        write!(f, "out_dir = {:?}\n", self.out_dir).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn new_works() {
        let config = Config::new();
        assert_eq!(config.frequencies, &[1.0]);
        assert_eq!(config.source_current, 1.0);
        assert_eq!(config.out_dir, "/tmp/cbsim/results");
    }

    #[test]
    fn setters_capture_errors() {
        let mut config = Config::new();
        assert_eq!(config.set_frequencies(&[]).err(), Some("at least one frequency is required"));
        assert_eq!(
            config.set_frequencies(&[1.0, 0.0]).err(),
            Some("frequencies must be > 0.0")
        );
        assert_eq!(config.set_source_current(0.0).err(), Some("source current must be > 0.0"));
        assert_eq!(config.set_out_dir("").err(), Some("output directory must not be empty"));
    }

    #[test]
    fn setters_work() {
        let mut config = Config::new();
        config
            .set_frequencies(&[0.1, 1.0, 10.0])
            .unwrap()
            .set_source_current(2.0)
            .unwrap()
            .set_out_dir("/tmp/cbsim/test")
            .unwrap();
        assert_eq!(config.frequencies, &[0.1, 1.0, 10.0]);
        assert_eq!(config.source_current, 2.0);
        assert_eq!(config.out_dir, "/tmp/cbsim/test");
    }

    #[test]
    fn display_works() {
        let config = Config::new();
        let text = format!("{}", config);
        assert!(text.contains("Configuration data"));
        assert!(text.contains("frequencies = [1.0]"));
    }
}
