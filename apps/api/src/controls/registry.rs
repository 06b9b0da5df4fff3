use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};

use crate::errors::AppError;
use crate::models::control::ControlRecord;

/// The Annex A catalogue, indexed by `new_control_id`.
///
/// Invariant: identifiers are unique. `select` resolves caller-supplied
/// subsets in catalogue order, rejecting identifiers the catalogue does not
/// contain.
#[derive(Debug)]
pub struct ControlRegistry {
    controls: Vec<ControlRecord>,
    index: HashMap<String, usize>,
}

impl ControlRegistry {
    /// Loads the catalogue from a CSV file with headers
    /// `old_control_id,old_title,new_control_id,new_title,domain,description`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open control catalogue {}", path.display()))?;

        let mut controls: Vec<ControlRecord> = Vec::new();
        for (i, row) in reader.deserialize::<ControlRecord>().enumerate() {
            // +2: one for the header row, one for 1-based line numbers
            let record = row.with_context(|| {
                format!("Malformed control row at line {} of {}", i + 2, path.display())
            })?;
            controls.push(record);
        }

        ensure!(
            !controls.is_empty(),
            "Control catalogue {} contains no controls",
            path.display()
        );

        let mut index = HashMap::with_capacity(controls.len());
        for (i, control) in controls.iter().enumerate() {
            if index.insert(control.new_control_id.clone(), i).is_some() {
                bail!(
                    "Duplicate control identifier '{}' in {}",
                    control.new_control_id,
                    path.display()
                );
            }
        }

        Ok(Self { controls, index })
    }

    /// The full catalogue in file order.
    pub fn all(&self) -> &[ControlRecord] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn get(&self, new_control_id: &str) -> Option<&ControlRecord> {
        self.index.get(new_control_id).map(|&i| &self.controls[i])
    }

    /// Resolves a caller-supplied selection of control identifiers.
    ///
    /// An empty selection means the whole catalogue. Duplicates collapse, and
    /// the result follows catalogue order, not request order. Any identifier
    /// absent from the catalogue fails the whole selection.
    pub fn select(&self, ids: &[String]) -> Result<Vec<&ControlRecord>, AppError> {
        if ids.is_empty() {
            return Ok(self.controls.iter().collect());
        }

        let mut wanted: HashSet<&str> = HashSet::new();
        let mut unknown: Vec<&str> = Vec::new();
        for id in ids {
            if self.index.contains_key(id.as_str()) {
                wanted.insert(id.as_str());
            } else if !unknown.contains(&id.as_str()) {
                unknown.push(id.as_str());
            }
        }

        if !unknown.is_empty() {
            return Err(AppError::Validation(format!(
                "Unknown control identifiers: {}",
                unknown.join(", ")
            )));
        }

        Ok(self
            .controls
            .iter()
            .filter(|c| wanted.contains(c.new_control_id.as_str()))
            .collect())
    }
}
