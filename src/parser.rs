//! Parse schema source into a [`FileDescriptor`] using PEST.
//!
//! Only the subset the codec supports is accepted: scalar and enum fields, `optional`
//! presence, `[default = ...]`, `import public`. Type references stay as written and
//! are resolved by [`DescriptorPool::build`](crate::descriptor::DescriptorPool::build).

use crate::descriptor::{
    EnumDescriptor, FieldDescriptor, FileDescriptor, MessageDescriptor, Presence, ScalarType, Syntax,
};
use crate::value::Value;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct SchemaParser;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("{file}: parse error: {message}")]
    Syntax { file: String, message: String },
    #[error("{file}: unsupported syntax \"{syntax}\"")]
    UnsupportedSyntax { file: String, syntax: String },
    #[error("{message}.{field}: unsupported field type `{type_name}`")]
    UnsupportedType { message: String, field: String, type_name: String },
    #[error("{message}.{field}: `required` is not allowed in proto3")]
    RequiredInProto3 { message: String, field: String },
    #[error("{message}.{field}: bad default `{literal}`")]
    BadDefault { message: String, field: String, literal: String },
    #[error("{context}: bad number `{literal}`")]
    BadNumber { context: String, literal: String },
}

/// Parse one schema file. `import_path` becomes the file's name.
pub fn parse_schema(import_path: &str, source: &str) -> Result<FileDescriptor, SchemaError> {
    let mut pairs = SchemaParser::parse(Rule::file, source).map_err(|e| SchemaError::Syntax {
        file: import_path.to_string(),
        message: e.to_string(),
    })?;
    let Some(root) = pairs.next() else {
        return Err(SchemaError::Syntax {
            file: import_path.to_string(),
            message: "empty parse".to_string(),
        });
    };

    let mut file = FileDescriptor::new(import_path, "");
    // proto2 unless declared otherwise.
    file.syntax = Syntax::Proto2;
    let mut message_pairs = Vec::new();
    for inner in root.into_inner() {
        match inner.as_rule() {
            Rule::syntax_decl => {
                let syntax = string_value(inner);
                file.syntax = match syntax.as_str() {
                    "proto2" => Syntax::Proto2,
                    "proto3" => Syntax::Proto3,
                    _ => {
                        return Err(SchemaError::UnsupportedSyntax {
                            file: import_path.to_string(),
                            syntax,
                        })
                    }
                };
            }
            Rule::package_decl => {
                if let Some(p) = inner.into_inner().next() {
                    file.package = p.as_str().to_string();
                }
            }
            Rule::import_decl => {
                let mut public = false;
                let mut path = String::new();
                for p in inner.into_inner() {
                    match p.as_rule() {
                        Rule::public_kw => public = true,
                        Rule::string_lit => path = string_literal(p),
                        _ => {}
                    }
                }
                if public {
                    file.public_dependencies.push(path.clone());
                }
                file.dependencies.push(path);
            }
            Rule::enum_def => {
                let e = build_enum(&file, inner)?;
                file.enums.push(e);
            }
            // Messages may reference enums declared further down.
            Rule::message_def => message_pairs.push(inner),
            _ => {}
        }
    }
    for pair in message_pairs {
        let m = build_message(&file, pair)?;
        file.messages.push(m);
    }
    tracing::debug!(
        file = %file.name,
        messages = file.messages.len(),
        enums = file.enums.len(),
        "schema parsed"
    );
    Ok(file)
}

/// Contents of the string literal inside `pair`.
fn string_value(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .find(|p| p.as_rule() == Rule::string_lit)
        .map(string_literal)
        .unwrap_or_default()
}

fn string_literal(pair: Pair<Rule>) -> String {
    pair.into_inner()
        .next()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

fn parse_int(text: &str) -> Option<i128> {
    let (neg, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => i128::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i128>().ok()?,
    };
    Some(if neg { -magnitude } else { magnitude })
}

fn build_enum(file: &FileDescriptor, pair: Pair<Rule>) -> Result<EnumDescriptor, SchemaError> {
    let mut inner = pair.into_inner();
    let name = inner.next().map(|p| p.as_str().to_string()).unwrap_or_default();
    let full_name = file.qualify(&name);
    let mut values = Vec::new();
    for p in inner {
        if p.as_rule() != Rule::enum_value {
            continue;
        }
        let mut it = p.into_inner();
        let value_name = it.next().map(|p| p.as_str().to_string()).unwrap_or_default();
        let literal = it.next().map(|p| p.as_str()).unwrap_or_default();
        let number = parse_int(literal)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| SchemaError::BadNumber {
                context: format!("{}.{}", full_name, value_name),
                literal: literal.to_string(),
            })?;
        values.push((value_name, number));
    }
    Ok(EnumDescriptor {
        name,
        full_name,
        values,
    })
}

fn build_message(file: &FileDescriptor, pair: Pair<Rule>) -> Result<MessageDescriptor, SchemaError> {
    let mut inner = pair.into_inner();
    let name = inner.next().map(|p| p.as_str().to_string()).unwrap_or_default();
    let full_name = file.qualify(&name);
    let mut fields = Vec::new();
    for p in inner {
        if p.as_rule() == Rule::field {
            fields.push(build_field(file, &full_name, p)?);
        }
    }
    Ok(MessageDescriptor {
        name,
        full_name,
        fields,
    })
}

fn build_field(file: &FileDescriptor, message: &str, pair: Pair<Rule>) -> Result<FieldDescriptor, SchemaError> {
    let mut label = None;
    let mut type_name = "";
    let mut name = "";
    let mut number_text = "";
    let mut default_literal = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::label => label = Some(p.as_str()),
            Rule::type_name => type_name = p.as_str(),
            Rule::ident => name = p.as_str(),
            Rule::int_lit => number_text = p.as_str(),
            Rule::field_options => {
                for opt in p.into_inner() {
                    if opt.as_rule() == Rule::default_option {
                        default_literal = opt.into_inner().next().map(|c| c.as_str().to_string());
                    }
                }
            }
            _ => {}
        }
    }

    let number = parse_int(number_text)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| SchemaError::BadNumber {
            context: format!("{}.{}", message, name),
            literal: number_text.to_string(),
        })?;

    let mut field = match ScalarType::from_keyword(type_name) {
        Some(scalar) => FieldDescriptor::new(name, number, scalar),
        None if matches!(type_name, "string" | "bytes" | "group" | "map") => {
            return Err(SchemaError::UnsupportedType {
                message: message.to_string(),
                field: name.to_string(),
                type_name: type_name.to_string(),
            })
        }
        None => FieldDescriptor::new(name, number, ScalarType::Enum).with_enum_type(type_name),
    };

    field.presence = match (file.syntax, label) {
        (Syntax::Proto2, _) | (Syntax::Proto3, Some("optional")) => Presence::Explicit,
        (Syntax::Proto3, Some(_)) => {
            return Err(SchemaError::RequiredInProto3 {
                message: message.to_string(),
                field: name.to_string(),
            })
        }
        (Syntax::Proto3, None) => Presence::Implicit,
    };

    if let Some(literal) = default_literal {
        if field.scalar == ScalarType::Enum && parse_int(&literal).is_none() {
            return Ok(field.with_enum_default(literal));
        }
        let value = parse_default(&field, &literal).ok_or_else(|| SchemaError::BadDefault {
            message: message.to_string(),
            field: name.to_string(),
            literal: literal.clone(),
        })?;
        field = field.with_default(value);
    }
    Ok(field)
}

fn parse_float(literal: &str) -> Option<f64> {
    match literal {
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        "nan" | "-nan" => Some(f64::NAN),
        _ => literal.parse::<f64>().ok().or_else(|| parse_int(literal).map(|n| n as f64)),
    }
}

/// Typed default for a field. Enum defaults here are numeric; value names are
/// resolved by the pool once the enum type is known.
fn parse_default(field: &FieldDescriptor, literal: &str) -> Option<Value> {
    let int = || parse_int(literal);
    Some(match field.scalar {
        ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => Value::I32(i32::try_from(int()?).ok()?),
        ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => Value::I64(i64::try_from(int()?).ok()?),
        ScalarType::Uint32 | ScalarType::Fixed32 => Value::U32(u32::try_from(int()?).ok()?),
        ScalarType::Uint64 | ScalarType::Fixed64 => Value::U64(u64::try_from(int()?).ok()?),
        ScalarType::Bool => match literal {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return None,
        },
        ScalarType::Float => Value::F32(parse_float(literal)? as f32),
        ScalarType::Double => Value::F64(parse_float(literal)?),
        ScalarType::Enum => Value::Enum(i32::try_from(int()?).ok()?),
    })
}
