//! Descriptor model: File → Message → Field (+ Enum) metadata and the validated pool.
//!
//! Descriptors are plain immutable data. [`DescriptorPool::build`] validates a set of
//! files together (dependencies present, tags unique and in range, enum references
//! resolvable and visible) and indexes them for lookup by import path and by full name.

use crate::value::Value;
use crate::wire::WireType;
use std::collections::{HashMap, HashSet};

/// Largest field number the wire format can carry (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;
/// Field numbers reserved by the protobuf implementation.
pub const RESERVED_FIELD_NUMBERS: std::ops::RangeInclusive<u32> = 19000..=19999;
/// Presence is tracked in a single `u64` word.
pub const MAX_FIELDS_PER_MESSAGE: usize = 64;

/// Scalar field types supported by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Bool,
    Enum,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Float,
    Double,
}

impl ScalarType {
    /// Parse a schema keyword (`int32`, `fixed64`, ...). `Enum` has no keyword.
    pub fn from_keyword(s: &str) -> Option<ScalarType> {
        Some(match s {
            "int32" => ScalarType::Int32,
            "int64" => ScalarType::Int64,
            "uint32" => ScalarType::Uint32,
            "uint64" => ScalarType::Uint64,
            "sint32" => ScalarType::Sint32,
            "sint64" => ScalarType::Sint64,
            "bool" => ScalarType::Bool,
            "fixed32" => ScalarType::Fixed32,
            "fixed64" => ScalarType::Fixed64,
            "sfixed32" => ScalarType::Sfixed32,
            "sfixed64" => ScalarType::Sfixed64,
            "float" => ScalarType::Float,
            "double" => ScalarType::Double,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
            ScalarType::Bool => "bool",
            ScalarType::Enum => "enum",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
        }
    }

    pub const fn wire_type(self) -> WireType {
        match self {
            ScalarType::Fixed32 | ScalarType::Sfixed32 | ScalarType::Float => WireType::Fixed32,
            ScalarType::Fixed64 | ScalarType::Sfixed64 | ScalarType::Double => WireType::Fixed64,
            _ => WireType::Varint,
        }
    }

    /// Rust type used by generated accessors (enums use the generated enum type instead).
    pub fn rust_type(self) -> &'static str {
        match self {
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 | ScalarType::Enum => "i32",
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => "i64",
            ScalarType::Uint32 | ScalarType::Fixed32 => "u32",
            ScalarType::Uint64 | ScalarType::Fixed64 => "u64",
            ScalarType::Bool => "bool",
            ScalarType::Float => "f32",
            ScalarType::Double => "f64",
        }
    }

    /// Variant name of this type, as spelled in generated code.
    pub fn variant_name(self) -> &'static str {
        match self {
            ScalarType::Int32 => "Int32",
            ScalarType::Int64 => "Int64",
            ScalarType::Uint32 => "Uint32",
            ScalarType::Uint64 => "Uint64",
            ScalarType::Sint32 => "Sint32",
            ScalarType::Sint64 => "Sint64",
            ScalarType::Bool => "Bool",
            ScalarType::Enum => "Enum",
            ScalarType::Fixed32 => "Fixed32",
            ScalarType::Fixed64 => "Fixed64",
            ScalarType::Sfixed32 => "Sfixed32",
            ScalarType::Sfixed64 => "Sfixed64",
            ScalarType::Float => "Float",
            ScalarType::Double => "Double",
        }
    }
}

/// Whether a field tracks presence explicitly (`optional`, proto2) or implicitly (proto3 default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Explicit,
    Implicit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub number: u32,
    pub scalar: ScalarType,
    pub presence: Presence,
    pub default: Option<Value>,
    /// For enum fields: the referenced type name as written, rewritten to the
    /// resolved full name by [`DescriptorPool::build`].
    pub enum_type: Option<String>,
    /// For enum fields: a default given as a value name, turned into `default` once
    /// the enum is resolved.
    pub enum_default: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, number: u32, scalar: ScalarType) -> Self {
        FieldDescriptor {
            name: name.into(),
            number,
            scalar,
            presence: Presence::Implicit,
            default: None,
            enum_type: None,
            enum_default: None,
        }
    }

    #[must_use]
    pub fn explicit(mut self) -> Self {
        self.presence = Presence::Explicit;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_enum_type(mut self, type_name: impl Into<String>) -> Self {
        self.scalar = ScalarType::Enum;
        self.enum_type = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn with_enum_default(mut self, value_name: impl Into<String>) -> Self {
        self.enum_default = Some(value_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    pub name: String,
    pub full_name: String,
    /// Declaration order; this is the slot layout order.
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    pub fn field_by_number(&self, number: u32) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.number == number)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDescriptor {
    pub name: String,
    pub full_name: String,
    pub values: Vec<(String, i32)>,
}

impl EnumDescriptor {
    pub fn value_name(&self, number: i32) -> Option<&str> {
        self.values
            .iter()
            .find(|(_, n)| *n == number)
            .map(|(name, _)| name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Proto2,
    Proto3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    /// Import path, e.g. `google/protobuf/duration.proto`.
    pub name: String,
    pub package: String,
    pub syntax: Syntax,
    pub messages: Vec<MessageDescriptor>,
    pub enums: Vec<EnumDescriptor>,
    pub dependencies: Vec<String>,
    /// Subset of `dependencies` imported with `import public`.
    pub public_dependencies: Vec<String>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        FileDescriptor {
            name: name.into(),
            package: package.into(),
            syntax: Syntax::Proto3,
            messages: Vec::new(),
            enums: Vec::new(),
            dependencies: Vec::new(),
            public_dependencies: Vec::new(),
        }
    }

    /// Package-qualified name of a type declared at the top level of this file.
    pub fn qualify(&self, name: &str) -> String {
        if self.package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.package, name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    #[error("Duplicate file: {0}")]
    DuplicateFile(String),
    #[error("{file}: dependency not found: {dependency}")]
    MissingDependency { file: String, dependency: String },
    #[error("{file}: public dependency {dependency} is not listed as a dependency")]
    PublicNotDependency { file: String, dependency: String },
    #[error("Duplicate type name: {0}")]
    DuplicateType(String),
    #[error("{message}: duplicate field number {number}")]
    DuplicateFieldNumber { message: String, number: u32 },
    #[error("{message}: field number {number} out of range")]
    FieldNumberOutOfRange { message: String, number: u32 },
    #[error("{message}: more than 64 fields")]
    TooManyFields { message: String },
    #[error("{message}.{field}: unresolved type {type_name}")]
    UnresolvedType { message: String, field: String, type_name: String },
    #[error("{message}.{field}: default value does not match field type")]
    BadDefault { message: String, field: String },
    #[error("{message}.{field}: default values require explicit presence")]
    DefaultOnImplicit { message: String, field: String },
    #[error("{0}: enum has no values")]
    EmptyEnum(String),
    #[error("{0}: the first value of a proto3 enum must be zero")]
    Proto3EnumFirstValue(String),
}

/// Kind of a named type in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Message,
    Enum,
}

/// Location of a named type: owning file index, kind, index within the file.
#[derive(Debug, Clone, Copy)]
struct TypeEntry {
    file: usize,
    kind: TypeKind,
    index: usize,
}

/// Validated, indexed set of files.
#[derive(Debug, Clone)]
pub struct DescriptorPool {
    files: Vec<FileDescriptor>,
    files_by_name: HashMap<String, usize>,
    types_by_name: HashMap<String, TypeEntry>,
}

impl DescriptorPool {
    pub fn build(files: Vec<FileDescriptor>) -> Result<Self, DescriptorError> {
        let mut files_by_name = HashMap::new();
        for (i, f) in files.iter().enumerate() {
            if files_by_name.insert(f.name.clone(), i).is_some() {
                return Err(DescriptorError::DuplicateFile(f.name.clone()));
            }
        }
        let mut types_by_name = HashMap::new();
        for (fi, f) in files.iter().enumerate() {
            for dep in &f.dependencies {
                if !files_by_name.contains_key(dep) {
                    return Err(DescriptorError::MissingDependency {
                        file: f.name.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
            for dep in &f.public_dependencies {
                if !f.dependencies.contains(dep) {
                    return Err(DescriptorError::PublicNotDependency {
                        file: f.name.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
            let named = f
                .messages
                .iter()
                .enumerate()
                .map(|(i, m)| (m.full_name.clone(), TypeKind::Message, i))
                .chain(
                    f.enums
                        .iter()
                        .enumerate()
                        .map(|(i, e)| (e.full_name.clone(), TypeKind::Enum, i)),
                );
            for (full_name, kind, index) in named {
                let entry = TypeEntry { file: fi, kind, index };
                if types_by_name.insert(full_name.clone(), entry).is_some() {
                    return Err(DescriptorError::DuplicateType(full_name));
                }
            }
        }

        let mut pool = DescriptorPool {
            files,
            files_by_name,
            types_by_name,
        };
        pool.validate_and_resolve()?;
        Ok(pool)
    }

    fn validate_and_resolve(&mut self) -> Result<(), DescriptorError> {
        let mut resolved: Vec<(usize, usize, usize, String, Option<Value>)> = Vec::new();
        for (fi, f) in self.files.iter().enumerate() {
            for e in &f.enums {
                match e.values.first() {
                    None => return Err(DescriptorError::EmptyEnum(e.full_name.clone())),
                    Some((_, first)) if f.syntax == Syntax::Proto3 && *first != 0 => {
                        return Err(DescriptorError::Proto3EnumFirstValue(e.full_name.clone()))
                    }
                    Some(_) => {}
                }
            }
            let visible = self.visible_files(fi);
            for (mi, m) in f.messages.iter().enumerate() {
                if m.fields.len() > MAX_FIELDS_PER_MESSAGE {
                    return Err(DescriptorError::TooManyFields {
                        message: m.full_name.clone(),
                    });
                }
                let mut seen = HashSet::new();
                for (fdi, field) in m.fields.iter().enumerate() {
                    if field.number == 0
                        || field.number > MAX_FIELD_NUMBER
                        || RESERVED_FIELD_NUMBERS.contains(&field.number)
                    {
                        return Err(DescriptorError::FieldNumberOutOfRange {
                            message: m.full_name.clone(),
                            number: field.number,
                        });
                    }
                    if !seen.insert(field.number) {
                        return Err(DescriptorError::DuplicateFieldNumber {
                            message: m.full_name.clone(),
                            number: field.number,
                        });
                    }
                    let has_default = field.default.is_some() || field.enum_default.is_some();
                    if has_default && field.presence == Presence::Implicit {
                        return Err(DescriptorError::DefaultOnImplicit {
                            message: m.full_name.clone(),
                            field: field.name.clone(),
                        });
                    }
                    if let Some(default) = field.default {
                        if !default.fits(field.scalar) {
                            return Err(DescriptorError::BadDefault {
                                message: m.full_name.clone(),
                                field: field.name.clone(),
                            });
                        }
                    }
                    if field.scalar == ScalarType::Enum {
                        let written = field.enum_type.as_deref().unwrap_or_default();
                        let full = self
                            .resolve_enum_name(&f.package, written, &visible)
                            .ok_or_else(|| DescriptorError::UnresolvedType {
                                message: m.full_name.clone(),
                                field: field.name.clone(),
                                type_name: written.to_string(),
                            })?;
                        let default = self.enum_field_default(&full, field).ok_or_else(|| {
                            DescriptorError::BadDefault {
                                message: m.full_name.clone(),
                                field: field.name.clone(),
                            }
                        })?;
                        resolved.push((fi, mi, fdi, full, default));
                    }
                }
            }
        }
        for (fi, mi, fdi, full, default) in resolved {
            let field = &mut self.files[fi].messages[mi].fields[fdi];
            field.enum_type = Some(full);
            field.enum_default = None;
            field.default = default;
        }
        Ok(())
    }

    /// Default of an enum field once its type is known: a named value is looked up, a
    /// number must be declared, and an explicit-presence field without one reads the
    /// first declared value. `None` if the given default is not a value of the enum.
    fn enum_field_default(&self, enum_full_name: &str, field: &FieldDescriptor) -> Option<Option<Value>> {
        let e = self.find_enum(enum_full_name)?;
        let number = match (&field.enum_default, field.default) {
            (Some(name), _) => e.values.iter().find(|(n, _)| n == name)?.1,
            (None, Some(Value::Enum(n))) => {
                e.value_name(n)?;
                n
            }
            (None, Some(_)) => return None,
            (None, None) if field.presence == Presence::Explicit => e.values.first()?.1,
            (None, None) => return Some(None),
        };
        Some(Some(Value::Enum(number)))
    }

    /// Protobuf scoping: a leading `.` is absolute, otherwise try the innermost
    /// package first and walk outwards.
    fn resolve_enum_name(&self, package: &str, written: &str, visible: &HashSet<usize>) -> Option<String> {
        let candidates: Vec<String> = if let Some(abs) = written.strip_prefix('.') {
            vec![abs.to_string()]
        } else {
            let mut scopes: Vec<&str> = Vec::new();
            let mut scope = package;
            loop {
                scopes.push(scope);
                match scope.rfind('.') {
                    Some(i) => scope = &scope[..i],
                    None if !scope.is_empty() => scope = "",
                    None => break,
                }
            }
            scopes
                .into_iter()
                .map(|s| if s.is_empty() { written.to_string() } else { format!("{}.{}", s, written) })
                .collect()
        };
        candidates.into_iter().find(|c| {
            self.types_by_name
                .get(c)
                .is_some_and(|t| t.kind == TypeKind::Enum && visible.contains(&t.file))
        })
    }

    /// The file itself, its direct dependencies, and everything reachable from those
    /// through `import public` edges.
    fn visible_files(&self, file: usize) -> HashSet<usize> {
        let mut visible = HashSet::new();
        visible.insert(file);
        let mut stack: Vec<usize> = self.files[file]
            .dependencies
            .iter()
            .filter_map(|d| self.files_by_name.get(d).copied())
            .collect();
        while let Some(f) = stack.pop() {
            if !visible.insert(f) {
                continue;
            }
            stack.extend(
                self.files[f]
                    .public_dependencies
                    .iter()
                    .filter_map(|d| self.files_by_name.get(d).copied()),
            );
        }
        visible
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&FileDescriptor> {
        self.files_by_name.get(name).map(|&i| &self.files[i])
    }

    pub fn find_message(&self, full_name: &str) -> Option<&MessageDescriptor> {
        match self.types_by_name.get(full_name) {
            Some(t) if t.kind == TypeKind::Message => Some(&self.files[t.file].messages[t.index]),
            _ => None,
        }
    }

    pub fn find_enum(&self, full_name: &str) -> Option<&EnumDescriptor> {
        match self.types_by_name.get(full_name) {
            Some(t) if t.kind == TypeKind::Enum => Some(&self.files[t.file].enums[t.index]),
            _ => None,
        }
    }

    /// File that declares the named type.
    pub fn file_of_type(&self, full_name: &str) -> Option<&FileDescriptor> {
        self.types_by_name.get(full_name).map(|t| &self.files[t.file])
    }

    /// Dependency closure of `roots` (roots included), in depth-first discovery order.
    pub fn dependency_closure<'a>(&'a self, roots: &[&str]) -> Vec<&'a FileDescriptor> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut stack: Vec<&str> = roots.iter().rev().copied().collect();
        while let Some(name) = stack.pop() {
            if !seen.insert(name.to_string()) {
                continue;
            }
            if let Some(f) = self.file(name) {
                out.push(f);
                stack.extend(f.dependencies.iter().rev().map(String::as_str));
            }
        }
        out
    }
}
