const _: () = ::protobind::__internal::assert_compatible_gencode_version("0.1.0-beta");

extern "C" {
    fn __pb_thunk_demo_Point_new() -> *mut ::std::ffi::c_void;
    fn __pb_thunk_demo_Point_delete(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_clear(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_byte_size(msg: *mut ::std::ffi::c_void) -> usize;
    fn __pb_thunk_demo_Point_serialize(msg: *mut ::std::ffi::c_void, out: *mut u8, out_len: usize) -> isize;
    fn __pb_thunk_demo_Point_parse(msg: *mut ::std::ffi::c_void, data: *const u8, len: usize) -> ::protobind::ThunkStatus;
    fn __pb_thunk_demo_Point_merge(dst: *mut ::std::ffi::c_void, src: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_swap(a: *mut ::std::ffi::c_void, b: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_get_x(msg: *mut ::std::ffi::c_void) -> i32;
    fn __pb_thunk_demo_Point_set_x(msg: *mut ::std::ffi::c_void, value: i32);
    fn __pb_thunk_demo_Point_clear_x(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_has_x(msg: *mut ::std::ffi::c_void) -> bool;
    fn __pb_thunk_demo_Point_get_y(msg: *mut ::std::ffi::c_void) -> f64;
    fn __pb_thunk_demo_Point_set_y(msg: *mut ::std::ffi::c_void, value: f64);
    fn __pb_thunk_demo_Point_clear_y(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_has_y(msg: *mut ::std::ffi::c_void) -> bool;
    fn __pb_thunk_demo_Point_get_shade(msg: *mut ::std::ffi::c_void) -> i32;
    fn __pb_thunk_demo_Point_set_shade(msg: *mut ::std::ffi::c_void, value: i32);
    fn __pb_thunk_demo_Point_clear_shade(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_has_shade(msg: *mut ::std::ffi::c_void) -> bool;
    fn __pb_thunk_demo_Point_get_type(msg: *mut ::std::ffi::c_void) -> u32;
    fn __pb_thunk_demo_Point_set_type(msg: *mut ::std::ffi::c_void, value: u32);
    fn __pb_thunk_demo_Point_clear_type(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_has_type(msg: *mut ::std::ffi::c_void) -> bool;
    fn __pb_thunk_demo_Point_get_level(msg: *mut ::std::ffi::c_void) -> i32;
    fn __pb_thunk_demo_Point_set_level(msg: *mut ::std::ffi::c_void, value: i32);
    fn __pb_thunk_demo_Point_clear_level(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Point_has_level(msg: *mut ::std::ffi::c_void) -> bool;
}

/// `demo.Point`
pub struct Point {
    raw: *mut ::std::ffi::c_void,
}

// SAFETY: the handle owns its instance exclusively.
unsafe impl Send for Point {}
unsafe impl Sync for Point {}

impl Point {
    pub fn new() -> Self {
        Point { raw: unsafe { __pb_thunk_demo_Point_new() } }
    }

    pub fn parse(data: &[u8]) -> Result<Self, ::protobind::DecodeError> {
        let mut msg = Self::new();
        msg.clear_and_parse(data)?;
        Ok(msg)
    }

    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), ::protobind::DecodeError> {
        self.as_mut().clear_and_parse(data)
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.as_view().serialize()
    }

    pub fn byte_size(&self) -> usize {
        self.as_view().byte_size()
    }

    pub fn clear(&mut self) {
        self.as_mut().clear()
    }

    pub fn merge_from(&mut self, src: PointView<'_>) {
        self.as_mut().merge_from(src)
    }

    pub fn swap(&mut self, other: &mut Point) {
        unsafe { __pb_thunk_demo_Point_swap(self.raw, other.raw) }
    }

    pub fn as_view(&self) -> PointView<'_> {
        PointView { raw: self.raw, _marker: ::std::marker::PhantomData }
    }

    pub fn as_mut(&mut self) -> PointMut<'_> {
        PointMut { raw: self.raw, _marker: ::std::marker::PhantomData }
    }

    pub fn x(&self) -> i32 {
        self.as_view().x()
    }

    pub fn set_x(&mut self, value: i32) {
        self.as_mut().set_x(value)
    }

    pub fn clear_x(&mut self) {
        self.as_mut().clear_x()
    }

    pub fn has_x(&self) -> bool {
        self.as_view().has_x()
    }

    pub fn y(&self) -> f64 {
        self.as_view().y()
    }

    pub fn set_y(&mut self, value: f64) {
        self.as_mut().set_y(value)
    }

    pub fn clear_y(&mut self) {
        self.as_mut().clear_y()
    }

    pub fn has_y(&self) -> bool {
        self.as_view().has_y()
    }

    pub fn shade(&self) -> super::Shade {
        self.as_view().shade()
    }

    pub fn set_shade(&mut self, value: super::Shade) {
        self.as_mut().set_shade(value)
    }

    pub fn clear_shade(&mut self) {
        self.as_mut().clear_shade()
    }

    pub fn has_shade(&self) -> bool {
        self.as_view().has_shade()
    }

    pub fn r#type(&self) -> u32 {
        self.as_view().r#type()
    }

    pub fn set_type(&mut self, value: u32) {
        self.as_mut().set_type(value)
    }

    pub fn clear_type(&mut self) {
        self.as_mut().clear_type()
    }

    pub fn has_type(&self) -> bool {
        self.as_view().has_type()
    }

    pub fn level(&self) -> super::Level {
        self.as_view().level()
    }

    pub fn set_level(&mut self, value: super::Level) {
        self.as_mut().set_level(value)
    }

    pub fn clear_level(&mut self) {
        self.as_mut().clear_level()
    }

    pub fn has_level(&self) -> bool {
        self.as_view().has_level()
    }
}

impl Drop for Point {
    fn drop(&mut self) {
        unsafe { __pb_thunk_demo_Point_delete(self.raw) }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Point {
    fn clone(&self) -> Self {
        self.as_view().to_owned()
    }
}

#[derive(Clone, Copy)]
pub struct PointView<'a> {
    raw: *mut ::std::ffi::c_void,
    _marker: ::std::marker::PhantomData<&'a Point>,
}

impl<'a> PointView<'a> {
    pub fn serialize(self) -> Vec<u8> {
        let mut out = vec![0u8; self.byte_size()];
        let n = unsafe { __pb_thunk_demo_Point_serialize(self.raw, out.as_mut_ptr(), out.len()) };
        out.truncate(n.max(0) as usize);
        out
    }

    pub fn byte_size(self) -> usize {
        unsafe { __pb_thunk_demo_Point_byte_size(self.raw) }
    }

    pub fn to_owned(self) -> Point {
        let mut msg = Point::new();
        msg.merge_from(self);
        msg
    }

    pub fn x(self) -> i32 {
        unsafe { __pb_thunk_demo_Point_get_x(self.raw) }
    }

    pub fn has_x(self) -> bool {
        unsafe { __pb_thunk_demo_Point_has_x(self.raw) }
    }

    pub fn y(self) -> f64 {
        unsafe { __pb_thunk_demo_Point_get_y(self.raw) }
    }

    pub fn has_y(self) -> bool {
        unsafe { __pb_thunk_demo_Point_has_y(self.raw) }
    }

    pub fn shade(self) -> super::Shade {
        super::Shade(unsafe { __pb_thunk_demo_Point_get_shade(self.raw) })
    }

    pub fn has_shade(self) -> bool {
        unsafe { __pb_thunk_demo_Point_has_shade(self.raw) }
    }

    pub fn r#type(self) -> u32 {
        unsafe { __pb_thunk_demo_Point_get_type(self.raw) }
    }

    pub fn has_type(self) -> bool {
        unsafe { __pb_thunk_demo_Point_has_type(self.raw) }
    }

    pub fn level(self) -> super::Level {
        super::Level(unsafe { __pb_thunk_demo_Point_get_level(self.raw) })
    }

    pub fn has_level(self) -> bool {
        unsafe { __pb_thunk_demo_Point_has_level(self.raw) }
    }
}

pub struct PointMut<'a> {
    raw: *mut ::std::ffi::c_void,
    _marker: ::std::marker::PhantomData<&'a mut Point>,
}

impl<'a> PointMut<'a> {
    pub fn as_view(&self) -> PointView<'_> {
        PointView { raw: self.raw, _marker: ::std::marker::PhantomData }
    }

    pub fn clear(&mut self) {
        unsafe { __pb_thunk_demo_Point_clear(self.raw) }
    }

    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), ::protobind::DecodeError> {
        unsafe { __pb_thunk_demo_Point_parse(self.raw, data.as_ptr(), data.len()) }.into_result()
    }

    pub fn merge_from(&mut self, src: PointView<'_>) {
        unsafe { __pb_thunk_demo_Point_merge(self.raw, src.raw) }
    }

    pub fn x(&self) -> i32 {
        self.as_view().x()
    }

    pub fn set_x(&mut self, value: i32) {
        unsafe { __pb_thunk_demo_Point_set_x(self.raw, value) }
    }

    pub fn clear_x(&mut self) {
        unsafe { __pb_thunk_demo_Point_clear_x(self.raw) }
    }

    pub fn has_x(&self) -> bool {
        self.as_view().has_x()
    }

    pub fn y(&self) -> f64 {
        self.as_view().y()
    }

    pub fn set_y(&mut self, value: f64) {
        unsafe { __pb_thunk_demo_Point_set_y(self.raw, value) }
    }

    pub fn clear_y(&mut self) {
        unsafe { __pb_thunk_demo_Point_clear_y(self.raw) }
    }

    pub fn has_y(&self) -> bool {
        self.as_view().has_y()
    }

    pub fn shade(&self) -> super::Shade {
        self.as_view().shade()
    }

    pub fn set_shade(&mut self, value: super::Shade) {
        unsafe { __pb_thunk_demo_Point_set_shade(self.raw, value.0) }
    }

    pub fn clear_shade(&mut self) {
        unsafe { __pb_thunk_demo_Point_clear_shade(self.raw) }
    }

    pub fn has_shade(&self) -> bool {
        self.as_view().has_shade()
    }

    pub fn r#type(&self) -> u32 {
        self.as_view().r#type()
    }

    pub fn set_type(&mut self, value: u32) {
        unsafe { __pb_thunk_demo_Point_set_type(self.raw, value) }
    }

    pub fn clear_type(&mut self) {
        unsafe { __pb_thunk_demo_Point_clear_type(self.raw) }
    }

    pub fn has_type(&self) -> bool {
        self.as_view().has_type()
    }

    pub fn level(&self) -> super::Level {
        self.as_view().level()
    }

    pub fn set_level(&mut self, value: super::Level) {
        unsafe { __pb_thunk_demo_Point_set_level(self.raw, value.0) }
    }

    pub fn clear_level(&mut self) {
        unsafe { __pb_thunk_demo_Point_clear_level(self.raw) }
    }

    pub fn has_level(&self) -> bool {
        self.as_view().has_level()
    }
}

/// `demo.Shade`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Shade(pub i32);

#[allow(non_upper_case_globals)]
impl Shade {
    pub const Dark: Shade = Shade(4);
    pub const Light: Shade = Shade(5);

    /// Declared name of this value, `None` for unknown numbers.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            4 => Some("SHADE_DARK"),
            5 => Some("SHADE_LIGHT"),
            _ => None,
        }
    }
}

impl From<i32> for Shade {
    fn from(v: i32) -> Self {
        Shade(v)
    }
}

impl From<Shade> for i32 {
    fn from(v: Shade) -> i32 {
        v.0
    }
}

impl ::std::fmt::Debug for Shade {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self.name() {
            Some(n) => f.write_str(n),
            None => write!(f, "Shade({})", self.0),
        }
    }
}

