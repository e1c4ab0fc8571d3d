//! Binding generator: one module per schema file plus a per-unit entry point.
//!
//! A *unit* is the set of files compiled into one crate. The generator emits, for every
//! file of the unit, `<path>.pb.rs` (and `<path>.pb.thunks.rs` for the native runtime
//! kind), and while handling the first file, the unit's `generated.rs` entry point that
//! declares every per-file module and flattens it with a glob re-export.

use crate::crate_mapping::{load_crate_mapping, CrateMap};
use crate::descriptor::{DescriptorPool, FileDescriptor};
use crate::emit;
use crate::naming;
use crate::version::{expected_runtime_version, GENERATOR_VERSION};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("{0}")]
    Config(String),
    #[error("no crate mapping for imported file `{0}`; add it to the crate_mapping file")]
    UnresolvedImport(String),
    #[error("file `{0}` is not in the descriptor pool")]
    UnknownFile(String),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which runtime the emitted bindings talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeKind {
    /// Bindings wrap `protobind::Message` directly.
    #[default]
    SameLanguage,
    /// Bindings call `extern "C"` thunks; the codec lives behind the boundary.
    ForeignNative,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub kind: RuntimeKind,
    pub crate_mapping: Option<PathBuf>,
    pub strip_nonfunctional_codegen: bool,
}

impl Options {
    /// Parse `key=value,...`. Empty input gives the defaults.
    pub fn parse(param: &str) -> Result<Options, GenError> {
        let mut opts = Options::default();
        for item in param.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = match item.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (item, None),
            };
            match (key, value) {
                ("kind", Some("same")) => opts.kind = RuntimeKind::SameLanguage,
                ("kind", Some("native")) => opts.kind = RuntimeKind::ForeignNative,
                ("kind", v) => {
                    return Err(GenError::Config(format!(
                        "Unknown value for kind: `{}`; expected `same` or `native`",
                        v.unwrap_or_default()
                    )))
                }
                ("crate_mapping", Some(path)) if !path.is_empty() => {
                    opts.crate_mapping = Some(PathBuf::from(path))
                }
                ("crate_mapping", _) => {
                    return Err(GenError::Config("crate_mapping requires a file path".to_string()))
                }
                ("strip_nonfunctional_codegen", None | Some("true")) => opts.strip_nonfunctional_codegen = true,
                ("strip_nonfunctional_codegen", Some("false")) => opts.strip_nonfunctional_codegen = false,
                ("strip_nonfunctional_codegen", Some(v)) => {
                    return Err(GenError::Config(format!(
                        "Unknown value for strip_nonfunctional_codegen: `{}`",
                        v
                    )))
                }
                (k, _) => return Err(GenError::Config(format!("Unknown generator parameter `{}`", k))),
            }
        }
        Ok(opts)
    }
}

/// Output set: relative path → file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    files: BTreeMap<String, String>,
}

impl GeneratedFiles {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn insert(&mut self, path: String, contents: String) {
        self.files.insert(path, contents);
    }

    /// Write every file below `dir`, creating directories as needed.
    pub fn write_to(&self, dir: &Path) -> Result<(), GenError> {
        for (rel, contents) in &self.files {
            let path = dir.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| GenError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, contents).map_err(|source| GenError::Io { path: path.clone(), source })?;
        }
        Ok(())
    }
}

/// Proto files that only define editions features; their imports carry no code.
const KNOWN_FEATURE_PROTOS: &[&str] = &[
    "google/protobuf/cpp_features.proto",
    "google/protobuf/java_features.proto",
    "google/protobuf/go_features.proto",
];

pub fn is_known_feature_proto(import_path: &str) -> bool {
    KNOWN_FEATURE_PROTOS.contains(&import_path)
}

/// Read-only state shared by every file of one generation invocation.
pub struct GeneratorContext<'p> {
    pool: &'p DescriptorPool,
    unit_files: Vec<&'p FileDescriptor>,
    crate_map: CrateMap,
    options: Options,
}

impl<'p> GeneratorContext<'p> {
    /// Build a context, loading the crate mapping file named in `options` (if any).
    pub fn new(pool: &'p DescriptorPool, unit_files: &[&str], options: Options) -> Result<Self, GenError> {
        let mapping = match &options.crate_mapping {
            Some(path) => load_crate_mapping(path)?,
            None => HashMap::new(),
        };
        Self::with_mapping(pool, unit_files, options, mapping)
    }

    pub fn with_mapping(
        pool: &'p DescriptorPool,
        unit_files: &[&str],
        options: Options,
        mapping: HashMap<String, String>,
    ) -> Result<Self, GenError> {
        if unit_files.is_empty() {
            return Err(GenError::Config("no files to generate".to_string()));
        }
        let unit_files = unit_files
            .iter()
            .map(|name| pool.file(name).ok_or_else(|| GenError::UnknownFile(name.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        let crate_map = CrateMap::new(unit_files.iter().map(|f| f.name.clone()), mapping);
        Ok(GeneratorContext {
            pool,
            unit_files,
            crate_map,
            options,
        })
    }

    pub fn pool(&self) -> &'p DescriptorPool {
        self.pool
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn crate_map(&self) -> &CrateMap {
        &self.crate_map
    }

    pub fn unit_files(&self) -> &[&'p FileDescriptor] {
        &self.unit_files
    }

    /// Every file the unit depends on must be local or mapped to a unit.
    pub fn check_imports(&self) -> Result<(), GenError> {
        let roots: Vec<&str> = self.unit_files.iter().map(|f| f.name.as_str()).collect();
        for f in self.pool.dependency_closure(&roots) {
            self.crate_map.resolve(&f.name)?;
        }
        Ok(())
    }

    /// Path to a top-level type (by full name) from inside a per-file module.
    pub fn type_path(&self, full_name: &str) -> Result<String, GenError> {
        let file = self
            .pool
            .file_of_type(full_name)
            .ok_or_else(|| GenError::Config(format!("unknown type `{}`", full_name)))?;
        let unit = self.crate_map.resolve(&file.name)?;
        let name = full_name.rsplit('.').next().unwrap_or(full_name);
        Ok(naming::type_path((!unit.is_local).then_some(unit.unit.as_str()), name))
    }

    /// Generate the outputs of one file of the unit into `out`.
    pub fn generate(&self, file: &FileDescriptor, out: &mut GeneratedFiles) -> Result<(), GenError> {
        if !self.crate_map.is_local(&file.name) {
            return Err(GenError::Config(format!("`{}` is not part of the unit being generated", file.name)));
        }
        tracing::debug!(file = %file.name, kind = ?self.options.kind, "generating");

        let mut rs = String::new();
        if !self.options.strip_nonfunctional_codegen {
            let _ = writeln!(rs, "// Generated by protobind-gen {}. Do not edit.", GENERATOR_VERSION);
            let _ = writeln!(rs, "// source: {}", file.name);
            rs.push('\n');
        }
        let _ = writeln!(
            rs,
            "const _: () = ::protobind::__internal::assert_compatible_gencode_version(\"{}\");\n",
            expected_runtime_version(GENERATOR_VERSION)
        );
        self.emit_public_imports(file, &mut rs)?;

        let mut thunks = match self.options.kind {
            RuntimeKind::ForeignNative => Some(self.thunks_preamble(file)?),
            RuntimeKind::SameLanguage => None,
        };

        for msg in &file.messages {
            emit::message(self, msg, &mut rs)?;
            rs.push('\n');
            if let Some(thunks) = thunks.as_mut() {
                let _ = writeln!(thunks, "// {}", msg.full_name);
                emit::message_thunks(msg, thunks);
                thunks.push('\n');
            }
        }
        for e in &file.enums {
            emit::enumeration(e, &mut rs);
            rs.push('\n');
        }

        if file.name == self.unit_files[0].name {
            self.emit_entry_point(out);
        }
        out.insert(naming::rs_file(&file.name), rs);
        if let Some(thunks) = thunks {
            out.insert(naming::thunks_file(&file.name), thunks);
        }
        Ok(())
    }

    /// `pub use` every message (with its view types) and enum of the files reached
    /// from `file` over public-import edges, skipping files of this unit. Each file
    /// is visited once even when reachable over several paths.
    fn emit_public_imports(&self, file: &FileDescriptor, out: &mut String) -> Result<(), GenError> {
        let start_len = out.len();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![file.name.as_str()];
        while let Some(name) = stack.pop() {
            if !visited.insert(name) {
                continue;
            }
            let f = self.pool.file(name).ok_or_else(|| GenError::UnknownFile(name.to_string()))?;
            let unit = self.crate_map.resolve(&f.name)?;
            if !unit.is_local {
                tracing::debug!(file = %file.name, dep = %f.name, unit = %unit.unit, "re-exporting public import");
                for m in &f.messages {
                    let path = naming::type_path(Some(&unit.unit), &m.name);
                    let _ = writeln!(out, "pub use {};", path);
                    let _ = writeln!(out, "pub use {}View;", path);
                    let _ = writeln!(out, "pub use {}Mut;", path);
                }
                for e in &f.enums {
                    let _ = writeln!(out, "pub use {};", naming::type_path(Some(&unit.unit), &e.name));
                }
            }
            stack.extend(f.public_dependencies.iter().rev().map(String::as_str));
        }
        if out.len() > start_len {
            out.push('\n');
        }
        Ok(())
    }

    /// Opening of a thunks file: version check plus a link-time reference to every
    /// foreign unit this file imports, so their thunk symbols are linked in.
    fn thunks_preamble(&self, file: &FileDescriptor) -> Result<String, GenError> {
        let mut s = String::new();
        if !self.options.strip_nonfunctional_codegen {
            let _ = writeln!(s, "// Generated by protobind-gen {}. Do not edit.", GENERATOR_VERSION);
            let _ = writeln!(s, "// thunks for: {}", file.name);
            s.push('\n');
        }
        let _ = writeln!(
            s,
            "const _: () = ::protobind::__internal::assert_compatible_gencode_version(\"{}\");\n",
            expected_runtime_version(GENERATOR_VERSION)
        );
        let mut units = Vec::new();
        for dep in &file.dependencies {
            if self.options.strip_nonfunctional_codegen && is_known_feature_proto(dep) {
                continue;
            }
            let unit = self.crate_map.resolve(dep)?;
            if !unit.is_local && !units.contains(&unit.unit) {
                units.push(unit.unit);
            }
        }
        for unit in &units {
            let _ = writeln!(s, "#[allow(unused_imports)]\nuse ::{} as _;", unit);
        }
        if !units.is_empty() {
            s.push('\n');
        }
        Ok(s)
    }

    fn emit_entry_point(&self, out: &mut GeneratedFiles) {
        let path = naming::entry_point_file(&self.unit_files[0].name);
        tracing::debug!(path = %path, files = self.unit_files.len(), "emitting entry point");
        let mut s = String::new();
        if !self.options.strip_nonfunctional_codegen {
            let _ = writeln!(s, "// Generated by protobind-gen {}. Do not edit.\n", GENERATOR_VERSION);
        }
        for f in &self.unit_files {
            let module = naming::module_name(&f.name);
            let rel = naming::relative_path(&path, &naming::rs_file(&f.name));
            let _ = writeln!(s, "#[path = \"{}\"]", rel);
            let _ = writeln!(s, "#[allow(non_snake_case)]");
            let _ = writeln!(s, "pub mod {};", module);
            let _ = writeln!(s, "#[allow(unused_imports)]");
            let _ = writeln!(s, "pub use {}::*;", module);
            if self.options.kind == RuntimeKind::ForeignNative {
                let rel = naming::relative_path(&path, &naming::thunks_file(&f.name));
                let _ = writeln!(s, "#[path = \"{}\"]", rel);
                let _ = writeln!(s, "#[doc(hidden)]");
                let _ = writeln!(s, "#[allow(non_snake_case)]");
                let _ = writeln!(s, "pub mod {}_thunks;", module);
            }
            s.push('\n');
        }
        out.insert(path, s);
    }
}

/// Generate every file of a unit. The first entry of `unit_files` owns the entry
/// point. On error nothing is returned.
pub fn generate_unit(pool: &DescriptorPool, unit_files: &[&str], param: &str) -> Result<GeneratedFiles, GenError> {
    let options = Options::parse(param)?;
    let ctx = GeneratorContext::new(pool, unit_files, options)?;
    generate_with(&ctx)
}

/// As [`generate_unit`], with an already-built context.
pub fn generate_with(ctx: &GeneratorContext<'_>) -> Result<GeneratedFiles, GenError> {
    ctx.check_imports()?;
    let mut out = GeneratedFiles::default();
    for file in ctx.unit_files() {
        ctx.generate(file, &mut out)?;
    }
    tracing::debug!(files = out.len(), "unit generated");
    Ok(out)
}
