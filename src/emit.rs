//! Source text for messages, enums and thunks.
//!
//! Everything here appends Rust source to a `String`. Paths into the runtime are
//! always absolute (`::protobind::...`) so the emitted modules can live anywhere in
//! the consuming crate.

use crate::descriptor::{EnumDescriptor, FieldDescriptor, MessageDescriptor, Presence, ScalarType};
use crate::generator::{GenError, GeneratorContext, RuntimeKind};
use crate::naming::{enum_value_const, field_ident, mangle, snake_case, thunk_name};
use std::fmt::Write as _;

const PB: &str = "::protobind";
const C_VOID: &str = "*mut ::std::ffi::c_void";

/// Prefix of a message's table items; distinct message names give distinct prefixes.
fn table_prefix(name: &str) -> String {
    mangle(name)
}

fn value_variant(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => "I32",
        ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => "I64",
        ScalarType::Uint32 | ScalarType::Fixed32 => "U32",
        ScalarType::Uint64 | ScalarType::Fixed64 => "U64",
        ScalarType::Bool => "Bool",
        ScalarType::Float => "F32",
        ScalarType::Double => "F64",
        ScalarType::Enum => "Enum",
    }
}

/// Resolved accessor shape of one field.
struct FieldPlan<'a> {
    field: &'a FieldDescriptor,
    slot: usize,
    getter: String,
    snake: String,
    /// Type seen by the caller: a primitive, or the generated enum's path.
    api_type: String,
    /// Enum path when the field is an enum.
    enum_path: Option<String>,
}

impl FieldPlan<'_> {
    fn raw_type(&self) -> &'static str {
        self.field.scalar.rust_type()
    }

    fn wrap(&self, raw: &str) -> String {
        match &self.enum_path {
            Some(path) => format!("{}({})", path, raw),
            None => raw.to_string(),
        }
    }

    fn unwrap_arg(&self) -> &'static str {
        if self.enum_path.is_some() {
            "value.0"
        } else {
            "value"
        }
    }

    fn explicit(&self) -> bool {
        self.field.presence == Presence::Explicit
    }
}

fn plan<'a>(ctx: &GeneratorContext<'_>, msg: &'a MessageDescriptor) -> Result<Vec<FieldPlan<'a>>, GenError> {
    msg.fields
        .iter()
        .enumerate()
        .map(|(slot, field)| {
            let enum_path = match (&field.scalar, &field.enum_type) {
                (ScalarType::Enum, Some(full)) => Some(ctx.type_path(full)?),
                _ => None,
            };
            Ok(FieldPlan {
                field,
                slot,
                getter: field_ident(&field.name),
                snake: snake_case(&field.name),
                api_type: enum_path.clone().unwrap_or_else(|| field.scalar.rust_type().to_string()),
                enum_path,
            })
        })
        .collect()
}

/// `const <Msg>_FIELDS` plus the lazily built `static <Msg>_TABLE`.
fn dispatch_table(msg: &MessageDescriptor, out: &mut String) {
    let prefix = table_prefix(&msg.name);
    let _ = writeln!(
        out,
        "#[allow(non_upper_case_globals)]\nconst {prefix}_FIELDS: [{PB}::FieldEntry; {}] = [",
        msg.fields.len()
    );
    for (slot, f) in msg.fields.iter().enumerate() {
        let presence = match f.presence {
            Presence::Explicit => "Explicit",
            Presence::Implicit => "Implicit",
        };
        let _ = write!(
            out,
            "    {PB}::FieldEntry::new(\"{}\", {}, {PB}::ScalarType::{}, {PB}::Presence::{}, {})",
            f.name,
            f.number,
            f.scalar.variant_name(),
            presence,
            slot
        );
        match f.default {
            Some(d) if !d.is_zero() => {
                let _ = writeln!(out, "\n        .with_default({:#x}),", d.to_bits());
            }
            _ => out.push_str(",\n"),
        }
    }
    out.push_str("];\n\n");
    let _ = writeln!(
        out,
        "#[allow(non_upper_case_globals)]\nstatic {prefix}_TABLE: ::std::sync::LazyLock<{PB}::DispatchTable> =\n    \
         ::std::sync::LazyLock::new(|| {PB}::DispatchTable::new(\"{}\", {prefix}_FIELDS.to_vec()));\n",
        msg.full_name
    );
}

/// Owned type, `View` and `Mut` for one message.
pub fn message(ctx: &GeneratorContext<'_>, msg: &MessageDescriptor, out: &mut String) -> Result<(), GenError> {
    let fields = plan(ctx, msg)?;
    match ctx.options().kind {
        RuntimeKind::SameLanguage => {
            dispatch_table(msg, out);
            same_language_message(msg, &fields, out);
        }
        RuntimeKind::ForeignNative => native_message(msg, &fields, out),
    }
    Ok(())
}

fn same_language_message(msg: &MessageDescriptor, fields: &[FieldPlan<'_>], out: &mut String) {
    let name = &msg.name;
    let prefix = table_prefix(name);

    let _ = writeln!(out, "/// `{}`", msg.full_name);
    let _ = writeln!(out, "#[derive(Clone, PartialEq)]");
    let _ = writeln!(out, "pub struct {name} {{\n    inner: {PB}::Message<'static>,\n}}\n");

    let _ = writeln!(out, "impl {name} {{");
    let _ = writeln!(
        out,
        "    pub fn new() -> Self {{\n        {name} {{ inner: {PB}::Message::new(&{prefix}_TABLE) }}\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn parse(data: &[u8]) -> Result<Self, {PB}::DecodeError> {{\n        \
         let mut msg = Self::new();\n        msg.inner.parse(data)?;\n        Ok(msg)\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), {PB}::DecodeError> {{\n        \
         self.inner.parse(data)\n    }}\n"
    );
    let _ = writeln!(out, "    pub fn serialize(&self) -> Vec<u8> {{\n        self.inner.serialize()\n    }}\n");
    let _ = writeln!(out, "    pub fn byte_size(&self) -> usize {{\n        self.inner.byte_size()\n    }}\n");
    let _ = writeln!(out, "    pub fn clear(&mut self) {{\n        self.inner.clear()\n    }}\n");
    let _ = writeln!(
        out,
        "    pub fn merge_from(&mut self, src: {name}View<'_>) {{\n        self.inner.merge_from(src.msg)\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn swap(&mut self, other: &mut {name}) {{\n        self.inner.swap(&mut other.inner)\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn as_view(&self) -> {name}View<'_> {{\n        {name}View {{ msg: &self.inner }}\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn as_mut(&mut self) -> {name}Mut<'_> {{\n        {name}Mut {{ msg: &mut self.inner }}\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn as_message(&self) -> &{PB}::Message<'static> {{\n        &self.inner\n    }}"
    );
    for f in fields {
        owned_accessors(f, out);
    }
    out.push_str("}\n\n");

    let _ = writeln!(
        out,
        "impl Default for {name} {{\n    fn default() -> Self {{\n        Self::new()\n    }}\n}}\n"
    );
    let _ = writeln!(
        out,
        "impl ::std::fmt::Debug for {name} {{\n    \
         fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {{\n        \
         ::std::fmt::Debug::fmt(&self.inner, f)\n    }}\n}}\n"
    );

    // View
    let _ = writeln!(out, "#[derive(Clone, Copy)]");
    let _ = writeln!(
        out,
        "pub struct {name}View<'a> {{\n    msg: &'a {PB}::Message<'static>,\n}}\n"
    );
    let _ = writeln!(out, "impl<'a> {name}View<'a> {{");
    let _ = writeln!(out, "    pub fn serialize(self) -> Vec<u8> {{\n        self.msg.serialize()\n    }}\n");
    let _ = writeln!(out, "    pub fn byte_size(self) -> usize {{\n        self.msg.byte_size()\n    }}\n");
    let _ = write!(
        out,
        "    pub fn to_owned(self) -> {name} {{\n        {name} {{ inner: self.msg.clone() }}\n    }}\n"
    );
    for f in fields {
        let _ = write!(
            out,
            "\n    pub fn {}(self) -> {} {{\n        {}\n    }}\n",
            f.getter,
            f.api_type,
            f.wrap(&format!(
                "<{} as {PB}::__internal::ScalarBits>::from_value(self.msg.get_slot({}))",
                f.raw_type(),
                f.slot
            ))
        );
        if f.explicit() {
            let _ = write!(
                out,
                "\n    pub fn has_{}(self) -> bool {{\n        self.msg.has_slot({})\n    }}\n",
                f.snake, f.slot
            );
        }
    }
    out.push_str("}\n\n");

    // Mut
    let _ = writeln!(
        out,
        "pub struct {name}Mut<'a> {{\n    msg: &'a mut {PB}::Message<'static>,\n}}\n"
    );
    let _ = writeln!(out, "impl<'a> {name}Mut<'a> {{");
    let _ = writeln!(
        out,
        "    pub fn as_view(&self) -> {name}View<'_> {{\n        {name}View {{ msg: &*self.msg }}\n    }}\n"
    );
    let _ = writeln!(out, "    pub fn clear(&mut self) {{\n        self.msg.clear()\n    }}\n");
    let _ = writeln!(
        out,
        "    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), {PB}::DecodeError> {{\n        \
         self.msg.parse(data)\n    }}\n"
    );
    let _ = write!(
        out,
        "    pub fn merge_from(&mut self, src: {name}View<'_>) {{\n        self.msg.merge_from(src.msg)\n    }}\n"
    );
    for f in fields {
        let _ = write!(
            out,
            "\n    pub fn {}(&self) -> {} {{\n        self.as_view().{}()\n    }}\n",
            f.getter, f.api_type, f.getter
        );
        let _ = write!(
            out,
            "\n    pub fn set_{}(&mut self, value: {}) {{\n        self.msg.set_slot({}, {PB}::Value::{}({}))\n    }}\n",
            f.snake,
            f.api_type,
            f.slot,
            value_variant(f.field.scalar),
            f.unwrap_arg()
        );
        let _ = write!(
            out,
            "\n    pub fn clear_{}(&mut self) {{\n        self.msg.clear_slot({})\n    }}\n",
            f.snake, f.slot
        );
        if f.explicit() {
            let _ = write!(
                out,
                "\n    pub fn has_{}(&self) -> bool {{\n        self.as_view().has_{}()\n    }}\n",
                f.snake, f.snake
            );
        }
    }
    out.push_str("}\n");
}

/// Owned-type accessors forward to the view / mut handle.
fn owned_accessors(f: &FieldPlan<'_>, out: &mut String) {
    let _ = write!(
        out,
        "\n    pub fn {}(&self) -> {} {{\n        self.as_view().{}()\n    }}\n",
        f.getter, f.api_type, f.getter
    );
    let _ = write!(
        out,
        "\n    pub fn set_{}(&mut self, value: {}) {{\n        self.as_mut().set_{}(value)\n    }}\n",
        f.snake, f.api_type, f.snake
    );
    let _ = write!(
        out,
        "\n    pub fn clear_{}(&mut self) {{\n        self.as_mut().clear_{}()\n    }}\n",
        f.snake, f.snake
    );
    if f.explicit() {
        let _ = write!(
            out,
            "\n    pub fn has_{}(&self) -> bool {{\n        self.as_view().has_{}()\n    }}\n",
            f.snake, f.snake
        );
    }
}

fn native_message(msg: &MessageDescriptor, fields: &[FieldPlan<'_>], out: &mut String) {
    let name = &msg.name;
    let t = |op: &str| thunk_name(&msg.full_name, op);

    out.push_str("extern \"C\" {\n");
    let _ = writeln!(out, "    fn {}() -> {C_VOID};", t("new"));
    let _ = writeln!(out, "    fn {}(msg: {C_VOID});", t("delete"));
    let _ = writeln!(out, "    fn {}(msg: {C_VOID});", t("clear"));
    let _ = writeln!(out, "    fn {}(msg: {C_VOID}) -> usize;", t("byte_size"));
    let _ = writeln!(out, "    fn {}(msg: {C_VOID}, out: *mut u8, out_len: usize) -> isize;", t("serialize"));
    let _ = writeln!(
        out,
        "    fn {}(msg: {C_VOID}, data: *const u8, len: usize) -> {PB}::ThunkStatus;",
        t("parse")
    );
    let _ = writeln!(out, "    fn {}(dst: {C_VOID}, src: {C_VOID});", t("merge"));
    let _ = writeln!(out, "    fn {}(a: {C_VOID}, b: {C_VOID});", t("swap"));
    for f in fields {
        let raw = f.raw_type();
        let _ = writeln!(out, "    fn {}(msg: {C_VOID}) -> {raw};", t(&format!("get_{}", f.snake)));
        let _ = writeln!(out, "    fn {}(msg: {C_VOID}, value: {raw});", t(&format!("set_{}", f.snake)));
        let _ = writeln!(out, "    fn {}(msg: {C_VOID});", t(&format!("clear_{}", f.snake)));
        if f.explicit() {
            let _ = writeln!(out, "    fn {}(msg: {C_VOID}) -> bool;", t(&format!("has_{}", f.snake)));
        }
    }
    out.push_str("}\n\n");

    let _ = writeln!(out, "/// `{}`", msg.full_name);
    let _ = writeln!(out, "pub struct {name} {{\n    raw: {C_VOID},\n}}\n");
    let _ = writeln!(out, "// SAFETY: the handle owns its instance exclusively.");
    let _ = writeln!(out, "unsafe impl Send for {name} {{}}");
    let _ = writeln!(out, "unsafe impl Sync for {name} {{}}\n");

    let _ = writeln!(out, "impl {name} {{");
    let _ = writeln!(
        out,
        "    pub fn new() -> Self {{\n        {name} {{ raw: unsafe {{ {}() }} }}\n    }}\n",
        t("new")
    );
    let _ = writeln!(
        out,
        "    pub fn parse(data: &[u8]) -> Result<Self, {PB}::DecodeError> {{\n        \
         let mut msg = Self::new();\n        msg.clear_and_parse(data)?;\n        Ok(msg)\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), {PB}::DecodeError> {{\n        \
         self.as_mut().clear_and_parse(data)\n    }}\n"
    );
    let _ = writeln!(out, "    pub fn serialize(&self) -> Vec<u8> {{\n        self.as_view().serialize()\n    }}\n");
    let _ = writeln!(out, "    pub fn byte_size(&self) -> usize {{\n        self.as_view().byte_size()\n    }}\n");
    let _ = writeln!(out, "    pub fn clear(&mut self) {{\n        self.as_mut().clear()\n    }}\n");
    let _ = writeln!(
        out,
        "    pub fn merge_from(&mut self, src: {name}View<'_>) {{\n        self.as_mut().merge_from(src)\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn swap(&mut self, other: &mut {name}) {{\n        unsafe {{ {}(self.raw, other.raw) }}\n    }}\n",
        t("swap")
    );
    let _ = writeln!(
        out,
        "    pub fn as_view(&self) -> {name}View<'_> {{\n        \
         {name}View {{ raw: self.raw, _marker: ::std::marker::PhantomData }}\n    }}\n"
    );
    let _ = write!(
        out,
        "    pub fn as_mut(&mut self) -> {name}Mut<'_> {{\n        \
         {name}Mut {{ raw: self.raw, _marker: ::std::marker::PhantomData }}\n    }}\n"
    );
    for f in fields {
        owned_accessors(f, out);
    }
    out.push_str("}\n\n");

    let _ = writeln!(
        out,
        "impl Drop for {name} {{\n    fn drop(&mut self) {{\n        unsafe {{ {}(self.raw) }}\n    }}\n}}\n",
        t("delete")
    );
    let _ = writeln!(
        out,
        "impl Default for {name} {{\n    fn default() -> Self {{\n        Self::new()\n    }}\n}}\n"
    );
    let _ = writeln!(
        out,
        "impl Clone for {name} {{\n    fn clone(&self) -> Self {{\n        self.as_view().to_owned()\n    }}\n}}\n"
    );

    // View
    let _ = writeln!(out, "#[derive(Clone, Copy)]");
    let _ = writeln!(
        out,
        "pub struct {name}View<'a> {{\n    raw: {C_VOID},\n    _marker: ::std::marker::PhantomData<&'a {name}>,\n}}\n"
    );
    let _ = writeln!(out, "impl<'a> {name}View<'a> {{");
    let _ = writeln!(
        out,
        "    pub fn serialize(self) -> Vec<u8> {{\n        \
         let mut out = vec![0u8; self.byte_size()];\n        \
         let n = unsafe {{ {}(self.raw, out.as_mut_ptr(), out.len()) }};\n        \
         out.truncate(n.max(0) as usize);\n        out\n    }}\n",
        t("serialize")
    );
    let _ = writeln!(
        out,
        "    pub fn byte_size(self) -> usize {{\n        unsafe {{ {}(self.raw) }}\n    }}\n",
        t("byte_size")
    );
    let _ = write!(
        out,
        "    pub fn to_owned(self) -> {name} {{\n        let mut msg = {name}::new();\n        \
         msg.merge_from(self);\n        msg\n    }}\n"
    );
    for f in fields {
        let _ = write!(
            out,
            "\n    pub fn {}(self) -> {} {{\n        {}\n    }}\n",
            f.getter,
            f.api_type,
            f.wrap(&format!("unsafe {{ {}(self.raw) }}", t(&format!("get_{}", f.snake))))
        );
        if f.explicit() {
            let _ = write!(
                out,
                "\n    pub fn has_{}(self) -> bool {{\n        unsafe {{ {}(self.raw) }}\n    }}\n",
                f.snake,
                t(&format!("has_{}", f.snake))
            );
        }
    }
    out.push_str("}\n\n");

    // Mut
    let _ = writeln!(
        out,
        "pub struct {name}Mut<'a> {{\n    raw: {C_VOID},\n    _marker: ::std::marker::PhantomData<&'a mut {name}>,\n}}\n"
    );
    let _ = writeln!(out, "impl<'a> {name}Mut<'a> {{");
    let _ = writeln!(
        out,
        "    pub fn as_view(&self) -> {name}View<'_> {{\n        \
         {name}View {{ raw: self.raw, _marker: ::std::marker::PhantomData }}\n    }}\n"
    );
    let _ = writeln!(
        out,
        "    pub fn clear(&mut self) {{\n        unsafe {{ {}(self.raw) }}\n    }}\n",
        t("clear")
    );
    let _ = writeln!(
        out,
        "    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), {PB}::DecodeError> {{\n        \
         unsafe {{ {}(self.raw, data.as_ptr(), data.len()) }}.into_result()\n    }}\n",
        t("parse")
    );
    let _ = write!(
        out,
        "    pub fn merge_from(&mut self, src: {name}View<'_>) {{\n        unsafe {{ {}(self.raw, src.raw) }}\n    }}\n",
        t("merge")
    );
    for f in fields {
        let _ = write!(
            out,
            "\n    pub fn {}(&self) -> {} {{\n        self.as_view().{}()\n    }}\n",
            f.getter, f.api_type, f.getter
        );
        let _ = write!(
            out,
            "\n    pub fn set_{}(&mut self, value: {}) {{\n        unsafe {{ {}(self.raw, {}) }}\n    }}\n",
            f.snake,
            f.api_type,
            t(&format!("set_{}", f.snake)),
            f.unwrap_arg()
        );
        let _ = write!(
            out,
            "\n    pub fn clear_{}(&mut self) {{\n        unsafe {{ {}(self.raw) }}\n    }}\n",
            f.snake,
            t(&format!("clear_{}", f.snake))
        );
        if f.explicit() {
            let _ = write!(
                out,
                "\n    pub fn has_{}(&self) -> bool {{\n        self.as_view().has_{}()\n    }}\n",
                f.snake, f.snake
            );
        }
    }
    out.push_str("}\n");
}

/// Dispatch table and `#[no_mangle]` thunks for one message (native runtime kind).
pub fn message_thunks(msg: &MessageDescriptor, out: &mut String) {
    dispatch_table(msg, out);
    let prefix = table_prefix(&msg.name);
    let t = |op: &str| thunk_name(&msg.full_name, op);
    let rt = format!("{PB}::thunk");

    let _ = writeln!(
        out,
        "#[no_mangle]\npub extern \"C\" fn {}() -> {C_VOID} {{\n    {rt}::new_message(&{prefix}_TABLE)\n}}\n",
        t("new")
    );
    let simple: [(&str, &str, &str, &str); 3] = [
        ("delete", "msg: {v}", "", "delete_message(msg)"),
        ("clear", "msg: {v}", "", "clear(msg)"),
        ("byte_size", "msg: {v}", " -> usize", "byte_size(msg)"),
    ];
    for (op, params, ret, call) in simple {
        let _ = writeln!(
            out,
            "#[no_mangle]\npub unsafe extern \"C\" fn {}({}){} {{\n    {rt}::{}\n}}\n",
            t(op),
            params.replace("{v}", C_VOID),
            ret,
            call
        );
    }
    let _ = writeln!(
        out,
        "#[no_mangle]\npub unsafe extern \"C\" fn {}(msg: {C_VOID}, out: *mut u8, out_len: usize) -> isize {{\n    \
         {rt}::serialize(msg, out, out_len)\n}}\n",
        t("serialize")
    );
    let _ = writeln!(
        out,
        "#[no_mangle]\npub unsafe extern \"C\" fn {}(msg: {C_VOID}, data: *const u8, len: usize) -> {PB}::ThunkStatus {{\n    \
         {rt}::parse(msg, data, len)\n}}\n",
        t("parse")
    );
    let _ = writeln!(
        out,
        "#[no_mangle]\npub unsafe extern \"C\" fn {}(dst: {C_VOID}, src: {C_VOID}) {{\n    {rt}::merge(dst, src)\n}}\n",
        t("merge")
    );
    let _ = writeln!(
        out,
        "#[no_mangle]\npub unsafe extern \"C\" fn {}(a: {C_VOID}, b: {C_VOID}) {{\n    {rt}::swap(a, b)\n}}",
        t("swap")
    );
    for (slot, f) in msg.fields.iter().enumerate() {
        let snake = snake_case(&f.name);
        let raw = f.scalar.rust_type();
        let _ = write!(
            out,
            "\n#[no_mangle]\npub unsafe extern \"C\" fn {}(msg: {C_VOID}) -> {raw} {{\n    {rt}::get::<{raw}>(msg, {slot})\n}}\n",
            t(&format!("get_{}", snake))
        );
        let _ = write!(
            out,
            "\n#[no_mangle]\npub unsafe extern \"C\" fn {}(msg: {C_VOID}, value: {raw}) {{\n    {rt}::set::<{raw}>(msg, {slot}, value)\n}}\n",
            t(&format!("set_{}", snake))
        );
        let _ = write!(
            out,
            "\n#[no_mangle]\npub unsafe extern \"C\" fn {}(msg: {C_VOID}) {{\n    {rt}::clear_field(msg, {slot})\n}}\n",
            t(&format!("clear_{}", snake))
        );
        if f.presence == Presence::Explicit {
            let _ = write!(
                out,
                "\n#[no_mangle]\npub unsafe extern \"C\" fn {}(msg: {C_VOID}) -> bool {{\n    {rt}::has(msg, {slot})\n}}\n",
                t(&format!("has_{}", snake))
            );
        }
    }
}

/// Open enum: `#[repr(transparent)]` newtype over `i32` with one associated constant
/// per value.
pub fn enumeration(e: &EnumDescriptor, out: &mut String) {
    let name = &e.name;
    let _ = writeln!(out, "/// `{}`", e.full_name);
    let _ = writeln!(out, "#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]");
    let _ = writeln!(out, "#[repr(transparent)]");
    let _ = writeln!(out, "pub struct {name}(pub i32);\n");

    let _ = writeln!(out, "#[allow(non_upper_case_globals)]");
    let _ = writeln!(out, "impl {name} {{");
    for (value, number) in &e.values {
        let _ = writeln!(
            out,
            "    pub const {}: {name} = {name}({});",
            enum_value_const(name, value),
            number
        );
    }
    out.push_str("\n    /// Declared name of this value, `None` for unknown numbers.\n");
    out.push_str("    pub fn name(self) -> Option<&'static str> {\n        match self.0 {\n");
    let mut seen = Vec::new();
    for (value, number) in &e.values {
        if seen.contains(number) {
            continue;
        }
        seen.push(*number);
        let _ = writeln!(out, "            {} => Some(\"{}\"),", number, value);
    }
    out.push_str("            _ => None,\n        }\n    }\n}\n\n");

    let _ = writeln!(
        out,
        "impl From<i32> for {name} {{\n    fn from(v: i32) -> Self {{\n        {name}(v)\n    }}\n}}\n"
    );
    let _ = writeln!(
        out,
        "impl From<{name}> for i32 {{\n    fn from(v: {name}) -> i32 {{\n        v.0\n    }}\n}}\n"
    );
    let _ = writeln!(
        out,
        "impl ::std::fmt::Debug for {name} {{\n    \
         fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {{\n        \
         match self.name() {{\n            Some(n) => f.write_str(n),\n            \
         None => write!(f, \"{name}({{}})\", self.0),\n        }}\n    }}\n}}"
    );
}
