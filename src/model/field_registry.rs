use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds named field arrays for hand-off to the visualization layer
///
/// Keys are model names such as `"intact"` or `"gaps"`; iteration follows the
/// sorted key order. Stored fields are aligned with the point sequence they
/// were built over.
#[derive(Serialize, Deserialize)]
pub struct FieldRegistry {
    fields: BTreeMap<String, Vec<f64>>,
}

impl FieldRegistry {
    /// Allocates a new instance
    pub fn new() -> Self {
        FieldRegistry { fields: BTreeMap::new() }
    }

    /// Inserts (or replaces) a named field
    pub fn set(&mut self, name: &str, field: Vec<f64>) -> Result<(), StrError> {
        if name.is_empty() {
            return Err("field name must not be empty");
        }
        self.fields.insert(name.to_string(), field);
        Ok(())
    }

    /// Returns a named field
    pub fn get(&self, name: &str) -> Result<&Vec<f64>, StrError> {
        self.fields.get(name).ok_or("cannot find a field with the given name")
    }

    /// Returns the sorted field names
    pub fn names(&self) -> Vec<&String> {
        self.fields.keys().collect()
    }

    /// Returns the number of stored fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the difference field `minuend − subtrahend`
    ///
    /// E.g., the secondary (perturbed minus primary) conductivity anomaly of
    /// `difference("gaps", "intact")`.
    pub fn difference(&self, minuend: &str, subtrahend: &str) -> Result<Vec<f64>, StrError> {
        let a = self.get(minuend)?;
        let b = self.get(subtrahend)?;
        if a.len() != b.len() {
            return Err("fields must have the same length to compute the difference");
        }
        Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
    }

    /// Reads a JSON file containing the registry
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let registry = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(registry)
    }

    /// Writes a JSON file with the registry
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
