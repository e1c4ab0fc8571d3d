const _: () = ::protobind::__internal::assert_compatible_gencode_version("0.1.0-beta");

// demo.Point
#[allow(non_upper_case_globals)]
const Point_FIELDS: [::protobind::FieldEntry; 5] = [
    ::protobind::FieldEntry::new("x", 1, ::protobind::ScalarType::Sint32, ::protobind::Presence::Explicit, 0),
    ::protobind::FieldEntry::new("y", 2, ::protobind::ScalarType::Double, ::protobind::Presence::Explicit, 1)
        .with_default(0x3ff8000000000000),
    ::protobind::FieldEntry::new("shade", 3, ::protobind::ScalarType::Enum, ::protobind::Presence::Explicit, 2)
        .with_default(0x4),
    ::protobind::FieldEntry::new("type", 4, ::protobind::ScalarType::Uint32, ::protobind::Presence::Explicit, 3),
    ::protobind::FieldEntry::new("level", 40, ::protobind::ScalarType::Enum, ::protobind::Presence::Explicit, 4),
];

#[allow(non_upper_case_globals)]
static Point_TABLE: ::std::sync::LazyLock<::protobind::DispatchTable> =
    ::std::sync::LazyLock::new(|| ::protobind::DispatchTable::new("demo.Point", Point_FIELDS.to_vec()));

#[no_mangle]
pub extern "C" fn __pb_thunk_demo_Point_new() -> *mut ::std::ffi::c_void {
    ::protobind::thunk::new_message(&Point_TABLE)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_delete(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::delete_message(msg)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_clear(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear(msg)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_byte_size(msg: *mut ::std::ffi::c_void) -> usize {
    ::protobind::thunk::byte_size(msg)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_serialize(msg: *mut ::std::ffi::c_void, out: *mut u8, out_len: usize) -> isize {
    ::protobind::thunk::serialize(msg, out, out_len)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_parse(msg: *mut ::std::ffi::c_void, data: *const u8, len: usize) -> ::protobind::ThunkStatus {
    ::protobind::thunk::parse(msg, data, len)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_merge(dst: *mut ::std::ffi::c_void, src: *mut ::std::ffi::c_void) {
    ::protobind::thunk::merge(dst, src)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_swap(a: *mut ::std::ffi::c_void, b: *mut ::std::ffi::c_void) {
    ::protobind::thunk::swap(a, b)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_get_x(msg: *mut ::std::ffi::c_void) -> i32 {
    ::protobind::thunk::get::<i32>(msg, 0)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_set_x(msg: *mut ::std::ffi::c_void, value: i32) {
    ::protobind::thunk::set::<i32>(msg, 0, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_clear_x(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 0)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_has_x(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::has(msg, 0)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_get_y(msg: *mut ::std::ffi::c_void) -> f64 {
    ::protobind::thunk::get::<f64>(msg, 1)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_set_y(msg: *mut ::std::ffi::c_void, value: f64) {
    ::protobind::thunk::set::<f64>(msg, 1, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_clear_y(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 1)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_has_y(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::has(msg, 1)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_get_shade(msg: *mut ::std::ffi::c_void) -> i32 {
    ::protobind::thunk::get::<i32>(msg, 2)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_set_shade(msg: *mut ::std::ffi::c_void, value: i32) {
    ::protobind::thunk::set::<i32>(msg, 2, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_clear_shade(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 2)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_has_shade(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::has(msg, 2)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_get_type(msg: *mut ::std::ffi::c_void) -> u32 {
    ::protobind::thunk::get::<u32>(msg, 3)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_set_type(msg: *mut ::std::ffi::c_void, value: u32) {
    ::protobind::thunk::set::<u32>(msg, 3, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_clear_type(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 3)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_has_type(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::has(msg, 3)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_get_level(msg: *mut ::std::ffi::c_void) -> i32 {
    ::protobind::thunk::get::<i32>(msg, 4)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_set_level(msg: *mut ::std::ffi::c_void, value: i32) {
    ::protobind::thunk::set::<i32>(msg, 4, value)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_clear_level(msg: *mut ::std::ffi::c_void) {
    ::protobind::thunk::clear_field(msg, 4)
}

#[no_mangle]
pub unsafe extern "C" fn __pb_thunk_demo_Point_has_level(msg: *mut ::std::ffi::c_void) -> bool {
    ::protobind::thunk::has(msg, 4)
}

