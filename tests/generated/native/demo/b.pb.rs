const _: () = ::protobind::__internal::assert_compatible_gencode_version("0.1.0-beta");

extern "C" {
    fn __pb_thunk_demo_Counter_new() -> *mut ::std::ffi::c_void;
    fn __pb_thunk_demo_Counter_delete(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Counter_clear(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Counter_byte_size(msg: *mut ::std::ffi::c_void) -> usize;
    fn __pb_thunk_demo_Counter_serialize(msg: *mut ::std::ffi::c_void, out: *mut u8, out_len: usize) -> isize;
    fn __pb_thunk_demo_Counter_parse(msg: *mut ::std::ffi::c_void, data: *const u8, len: usize) -> ::protobind::ThunkStatus;
    fn __pb_thunk_demo_Counter_merge(dst: *mut ::std::ffi::c_void, src: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Counter_swap(a: *mut ::std::ffi::c_void, b: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Counter_get_count(msg: *mut ::std::ffi::c_void) -> i64;
    fn __pb_thunk_demo_Counter_set_count(msg: *mut ::std::ffi::c_void, value: i64);
    fn __pb_thunk_demo_Counter_clear_count(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Counter_get_enabled(msg: *mut ::std::ffi::c_void) -> bool;
    fn __pb_thunk_demo_Counter_set_enabled(msg: *mut ::std::ffi::c_void, value: bool);
    fn __pb_thunk_demo_Counter_clear_enabled(msg: *mut ::std::ffi::c_void);
    fn __pb_thunk_demo_Counter_has_enabled(msg: *mut ::std::ffi::c_void) -> bool;
    fn __pb_thunk_demo_Counter_get_level(msg: *mut ::std::ffi::c_void) -> i32;
    fn __pb_thunk_demo_Counter_set_level(msg: *mut ::std::ffi::c_void, value: i32);
    fn __pb_thunk_demo_Counter_clear_level(msg: *mut ::std::ffi::c_void);
}

/// `demo.Counter`
pub struct Counter {
    raw: *mut ::std::ffi::c_void,
}

// SAFETY: the handle owns its instance exclusively.
unsafe impl Send for Counter {}
unsafe impl Sync for Counter {}

impl Counter {
    pub fn new() -> Self {
        Counter { raw: unsafe { __pb_thunk_demo_Counter_new() } }
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

    pub fn merge_from(&mut self, src: CounterView<'_>) {
        self.as_mut().merge_from(src)
    }

    pub fn swap(&mut self, other: &mut Counter) {
        unsafe { __pb_thunk_demo_Counter_swap(self.raw, other.raw) }
    }

    pub fn as_view(&self) -> CounterView<'_> {
        CounterView { raw: self.raw, _marker: ::std::marker::PhantomData }
    }

    pub fn as_mut(&mut self) -> CounterMut<'_> {
        CounterMut { raw: self.raw, _marker: ::std::marker::PhantomData }
    }

    pub fn count(&self) -> i64 {
        self.as_view().count()
    }

    pub fn set_count(&mut self, value: i64) {
        self.as_mut().set_count(value)
    }

    pub fn clear_count(&mut self) {
        self.as_mut().clear_count()
    }

    pub fn enabled(&self) -> bool {
        self.as_view().enabled()
    }

    pub fn set_enabled(&mut self, value: bool) {
        self.as_mut().set_enabled(value)
    }

    pub fn clear_enabled(&mut self) {
        self.as_mut().clear_enabled()
    }

    pub fn has_enabled(&self) -> bool {
        self.as_view().has_enabled()
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
}

impl Drop for Counter {
    fn drop(&mut self) {
        unsafe { __pb_thunk_demo_Counter_delete(self.raw) }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Counter {
    fn clone(&self) -> Self {
        self.as_view().to_owned()
    }
}

#[derive(Clone, Copy)]
pub struct CounterView<'a> {
    raw: *mut ::std::ffi::c_void,
    _marker: ::std::marker::PhantomData<&'a Counter>,
}

impl<'a> CounterView<'a> {
    pub fn serialize(self) -> Vec<u8> {
        let mut out = vec![0u8; self.byte_size()];
        let n = unsafe { __pb_thunk_demo_Counter_serialize(self.raw, out.as_mut_ptr(), out.len()) };
        out.truncate(n.max(0) as usize);
        out
    }

    pub fn byte_size(self) -> usize {
        unsafe { __pb_thunk_demo_Counter_byte_size(self.raw) }
    }

    pub fn to_owned(self) -> Counter {
        let mut msg = Counter::new();
        msg.merge_from(self);
        msg
    }

    pub fn count(self) -> i64 {
        unsafe { __pb_thunk_demo_Counter_get_count(self.raw) }
    }

    pub fn enabled(self) -> bool {
        unsafe { __pb_thunk_demo_Counter_get_enabled(self.raw) }
    }

    pub fn has_enabled(self) -> bool {
        unsafe { __pb_thunk_demo_Counter_has_enabled(self.raw) }
    }

    pub fn level(self) -> super::Level {
        super::Level(unsafe { __pb_thunk_demo_Counter_get_level(self.raw) })
    }
}

pub struct CounterMut<'a> {
    raw: *mut ::std::ffi::c_void,
    _marker: ::std::marker::PhantomData<&'a mut Counter>,
}

impl<'a> CounterMut<'a> {
    pub fn as_view(&self) -> CounterView<'_> {
        CounterView { raw: self.raw, _marker: ::std::marker::PhantomData }
    }

    pub fn clear(&mut self) {
        unsafe { __pb_thunk_demo_Counter_clear(self.raw) }
    }

    pub fn clear_and_parse(&mut self, data: &[u8]) -> Result<(), ::protobind::DecodeError> {
        unsafe { __pb_thunk_demo_Counter_parse(self.raw, data.as_ptr(), data.len()) }.into_result()
    }

    pub fn merge_from(&mut self, src: CounterView<'_>) {
        unsafe { __pb_thunk_demo_Counter_merge(self.raw, src.raw) }
    }

    pub fn count(&self) -> i64 {
        self.as_view().count()
    }

    pub fn set_count(&mut self, value: i64) {
        unsafe { __pb_thunk_demo_Counter_set_count(self.raw, value) }
    }

    pub fn clear_count(&mut self) {
        unsafe { __pb_thunk_demo_Counter_clear_count(self.raw) }
    }

    pub fn enabled(&self) -> bool {
        self.as_view().enabled()
    }

    pub fn set_enabled(&mut self, value: bool) {
        unsafe { __pb_thunk_demo_Counter_set_enabled(self.raw, value) }
    }

    pub fn clear_enabled(&mut self) {
        unsafe { __pb_thunk_demo_Counter_clear_enabled(self.raw) }
    }

    pub fn has_enabled(&self) -> bool {
        self.as_view().has_enabled()
    }

    pub fn level(&self) -> super::Level {
        self.as_view().level()
    }

    pub fn set_level(&mut self, value: super::Level) {
        unsafe { __pb_thunk_demo_Counter_set_level(self.raw, value.0) }
    }

    pub fn clear_level(&mut self) {
        unsafe { __pb_thunk_demo_Counter_clear_level(self.raw) }
    }
}

/// `demo.Level`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Level(pub i32);

#[allow(non_upper_case_globals)]
impl Level {
    pub const Low: Level = Level(0);
    pub const High: Level = Level(1);

    /// Declared name of this value, `None` for unknown numbers.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("LEVEL_LOW"),
            1 => Some("LEVEL_HIGH"),
            _ => None,
        }
    }
}

impl From<i32> for Level {
    fn from(v: i32) -> Self {
        Level(v)
    }
}

impl From<Level> for i32 {
    fn from(v: Level) -> i32 {
        v.0
    }
}

impl ::std::fmt::Debug for Level {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self.name() {
            Some(n) => f.write_str(n),
            None => write!(f, "Level({})", self.0),
        }
    }
}

