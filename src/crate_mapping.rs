//! Import path → compilation unit resolution.
//!
//! The mapping file lists, for each unit, its name, a count and that many import
//! paths, one token per line:
//!
//! ```text
//! well_known_types
//! 2
//! google/protobuf/duration.proto
//! google/protobuf/timestamp.proto
//! ```

use crate::generator::GenError;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Parse a crate-mapping file into an import path → unit name map.
pub fn parse_crate_mapping(text: &str) -> Result<HashMap<String, String>, GenError> {
    let mut lines = text.lines().map(str::trim).enumerate().filter(|(_, l)| !l.is_empty());
    let mut map = HashMap::new();
    while let Some((_, unit)) = lines.next() {
        let (line_no, count) = lines
            .next()
            .ok_or_else(|| GenError::Config(format!("crate mapping: missing file count for unit `{}`", unit)))?;
        let count: usize = count.parse().map_err(|_| {
            GenError::Config(format!(
                "crate mapping line {}: expected a file count for unit `{}`, found `{}`",
                line_no + 1,
                unit,
                count
            ))
        })?;
        for _ in 0..count {
            let (_, path) = lines.next().ok_or_else(|| {
                GenError::Config(format!(
                    "crate mapping: unit `{}` lists {} files but the input ends early",
                    unit, count
                ))
            })?;
            if let Some(prev) = map.insert(path.to_string(), unit.to_string()) {
                if prev != unit {
                    return Err(GenError::Config(format!(
                        "crate mapping: `{}` is mapped to both `{}` and `{}`",
                        path, prev, unit
                    )));
                }
            }
        }
    }
    Ok(map)
}

pub fn load_crate_mapping(path: &Path) -> Result<HashMap<String, String>, GenError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| GenError::Config(format!("cannot read crate mapping {}: {}", path.display(), e)))?;
    parse_crate_mapping(&text)
}

/// Which unit a file belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRef {
    pub unit: String,
    pub is_local: bool,
}

/// Read-only map built once per generation invocation.
#[derive(Debug, Clone, Default)]
pub struct CrateMap {
    local: HashSet<String>,
    foreign: HashMap<String, String>,
}

impl CrateMap {
    pub fn new<I, S>(local_files: I, mapping: HashMap<String, String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CrateMap {
            local: local_files.into_iter().map(Into::into).collect(),
            foreign: mapping,
        }
    }

    pub fn is_local(&self, file: &str) -> bool {
        self.local.contains(file)
    }

    pub fn resolve(&self, file: &str) -> Result<UnitRef, GenError> {
        if self.is_local(file) {
            return Ok(UnitRef {
                unit: String::new(),
                is_local: true,
            });
        }
        self.foreign
            .get(file)
            .map(|unit| UnitRef {
                unit: unit.clone(),
                is_local: false,
            })
            .ok_or_else(|| GenError::UnresolvedImport(file.to_string()))
    }
}
