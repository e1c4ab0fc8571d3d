const _: () = ::protobind::__internal::assert_compatible_gencode_version("0.1.0-beta");

// demo.Counter
#[allow(non_upper_case_globals)]
const Counter_FIELDS: [::protobind::FieldEntry; 3] = [
    ::protobind::FieldEntry::new("count", 1, ::protobind::ScalarType::Int64, ::protobind::Presence::Implicit, 0),
    ::protobind::FieldEntry::new("enabled", 2, ::protobind::ScalarType::Bool, ::protobind::Presence::Explicit, 1),
    ::protobind::FieldEntry::new("level", 3, ::protobind::ScalarType::Enum, ::protobind::Presence::Implicit, 2),
];

#[allow(non_upper_case_globals)]
static Counter_TABLE: ::std::sync::LazyLock<::protobind::DispatchTable> =
    ::std::sync::LazyLock::new(|| ::protobind::DispatchTable::new("demo.Counter", Counter_FIELDS.to_vec()));

#[no_mangle]
pub extern "C" fn __pb_thunk_demo_Counter_new() -> *mut ::std::ffi::c_void {
    ::protobind::thunk::new_message(&Counter_TABLE)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_delete(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::delete_message(msg)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_clear(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear(msg)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_byte_size(msg: *mut ::std::ffi::c_void) -> usize {
    ::protobind::thunk::byte_size(msg)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_serialize(msg: *mut ::std::ffi::c_void, out: *mut u8, out_len: usize) -> isize {
    ::protobind::thunk::serialize(msg, out, out_len)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_parse(msg: *mut ::std::ffi::c_void, data: *const u8, len: usize) -> ::protobind::ThunkStatus {
    ::protobind::thunk::parse(msg, data, len)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_merge(dst: *mut ::std::ffi::c_void, src: *mut ::std::ffi::c_void) {
    ::protobind::thunk::merge(dst, src)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_swap(a: *mut ::std::ffi::c_void, b: *mut ::std::ffi::c_void) {
    ::protobind::thunk::swap(a, b)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_get_count(msg: *mut ::std::ffi::c_void) -> i64 {
    ::protobind::thunk::get::<i64>(msg, 0)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_set_count(msg: *mut ::std::ffi::c_void, value: i64) {
    ::protobind::thunk::set::<i64>(msg, 0, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_clear_count(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 0)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_get_enabled(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::get::<bool>(msg, 1)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_set_enabled(msg: *mut ::std::ffi::c_void, value: bool) {
    ::protobind::thunk::set::<bool>(msg, 1, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_clear_enabled(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 1)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_has_enabled(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::has(msg, 1)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_get_level(msg: *mut ::std::ffi::c_void) -> i32 {
    ::protobind::thunk::get::<i32>(msg, 2)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_set_level(msg: *mut ::std::ffi::c_void, value: i32) {
    ::protobind::thunk::set::<i32>(msg, 2, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Counter_clear_level(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 2)
}

