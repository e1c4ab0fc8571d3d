//! Names and paths of emitted items.

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become",
    "box", "do", "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

fn strip_proto(import_path: &str) -> &str {
    import_path.strip_suffix(".proto").unwrap_or(import_path)
}

/// Module name for an import path: `google/protobuf/duration.proto` →
/// `google__protobuf__duration`.
pub fn module_name(import_path: &str) -> String {
    strip_proto(import_path)
        .replace('/', "__")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// `a/b.proto` → `a/b.pb.rs`.
pub fn rs_file(import_path: &str) -> String {
    format!("{}.pb.rs", strip_proto(import_path))
}

/// `a/b.proto` → `a/b.pb.thunks.rs`.
pub fn thunks_file(import_path: &str) -> String {
    format!("{}.pb.thunks.rs", strip_proto(import_path))
}

fn dir_of(path: &str) -> &str {
    path.rfind('/').map(|i| &path[..i]).unwrap_or("")
}

/// Entry point of a unit: `generated.rs` next to the first file's output.
pub fn entry_point_file(first_import_path: &str) -> String {
    match dir_of(first_import_path) {
        "" => "generated.rs".to_string(),
        dir => format!("{}/generated.rs", dir),
    }
}

/// Path of `to` relative to the directory containing `from`. Both are relative paths
/// under the same output root.
pub fn relative_path(from: &str, to: &str) -> String {
    let from_dir: Vec<&str> = dir_of(from).split('/').filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();
    let (to_dir, to_file) = to_parts.split_at(to_parts.len().saturating_sub(1));
    let common = from_dir.iter().zip(to_dir).take_while(|(a, b)| a == b).count();
    let mut out: Vec<&str> = vec![".."; from_dir.len() - common];
    out.extend_from_slice(&to_dir[common..]);
    out.extend_from_slice(to_file);
    out.join("/")
}

pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            out.push(c);
        }
    }
    out
}

pub fn upper_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Escape a field-derived identifier so it is a legal Rust item name.
pub fn rust_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Accessor name of a field: snake case, keyword-escaped.
pub fn field_ident(field_name: &str) -> String {
    rust_ident(&snake_case(field_name))
}

/// Associated constant name for an enum value: the `ENUM_NAME_` prefix is dropped
/// when present and the rest is UpperCamelCase. `Color::COLOR_DARK_RED` → `DarkRed`.
pub fn enum_value_const(enum_name: &str, value_name: &str) -> String {
    let prefix = format!("{}_", snake_case(enum_name).to_ascii_uppercase());
    let stripped = match value_name.strip_prefix(&prefix) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_alphabetic()) => rest,
        _ => value_name,
    };
    let name = upper_camel_case(stripped);
    if name == "Self" {
        "Self_".to_string()
    } else {
        name
    }
}

/// Symbol-safe form of a full type name: `_` doubled, `.` → `_`.
pub fn mangle(full_name: &str) -> String {
    full_name.replace('_', "__").replace('.', "_")
}

/// `__pb_thunk_<mangled full name>_<op>`.
pub fn thunk_name(full_name: &str, op: &str) -> String {
    format!("__pb_thunk_{}_{}", mangle(full_name), op)
}

/// Path to a top-level type as seen from a per-file module: the flat entry-point
/// namespace for local types, `::unit::` for foreign ones.
pub fn type_path(unit: Option<&str>, type_name: &str) -> String {
    match unit {
        None => format!("super::{}", type_name),
        Some(unit) => format!("::{}::{}", unit, type_name),
    }
}
