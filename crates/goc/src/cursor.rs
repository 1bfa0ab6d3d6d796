/// A cursor for reading bytes from a buffer.
///
/// This is the decode-side source of the codec: a whole encoded value is
/// held in memory and consumed front to back. The accessors are
/// infallible; callers guard them with [`crate::ensure_size!`], which is
/// where truncation turns into a decode error.
#[derive(Clone, Debug)]
pub struct ReadCursor<'a> {
    inner: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Creates a new `ReadCursor` over a byte slice.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { inner: bytes, pos: 0 }
    }

    /// Returns the number of bytes remaining.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len() - self.pos
    }

    /// Returns `true` if there are no bytes remaining.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if there are no bytes remaining.
    #[inline]
    pub const fn eof(&self) -> bool {
        self.is_empty()
    }

    /// Returns the current position.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Reads an array of `N` bytes.
    #[inline]
    #[track_caller]
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let bytes = &self.inner[self.pos..self.pos + N];
        self.pos += N;
        bytes.try_into().expect("N-elements array")
    }

    /// Reads a slice of `n` bytes.
    #[inline]
    #[track_caller]
    pub fn read_slice(&mut self, n: usize) -> &'a [u8] {
        let bytes = &self.inner[self.pos..self.pos + n];
        self.pos += n;
        bytes
    }

    /// Reads the remaining bytes.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        self.read_slice(self.len())
    }

    /// Reads a `u8`.
    #[inline]
    #[track_caller]
    pub fn read_u8(&mut self) -> u8 {
        self.read_array::<1>()[0]
    }

    /// Reads an `i8`.
    #[inline]
    #[track_caller]
    pub fn read_i8(&mut self) -> i8 {
        self.read_array::<1>()[0] as i8
    }

    /// Reads a little-endian `u16`.
    #[inline]
    #[track_caller]
    pub fn read_u16(&mut self) -> u16 {
        u16::from_le_bytes(self.read_array::<2>())
    }

    /// Reads a little-endian `i16`.
    #[inline]
    #[track_caller]
    pub fn read_i16(&mut self) -> i16 {
        i16::from_le_bytes(self.read_array::<2>())
    }

    /// Reads a little-endian `u32`.
    #[inline]
    #[track_caller]
    pub fn read_u32(&mut self) -> u32 {
        u32::from_le_bytes(self.read_array::<4>())
    }

    /// Reads a little-endian `i32`.
    #[inline]
    #[track_caller]
    pub fn read_i32(&mut self) -> i32 {
        i32::from_le_bytes(self.read_array::<4>())
    }

    /// Reads a little-endian `u64`.
    #[inline]
    #[track_caller]
    pub fn read_u64(&mut self) -> u64 {
        u64::from_le_bytes(self.read_array::<8>())
    }

    /// Reads a little-endian `i64`.
    #[inline]
    #[track_caller]
    pub fn read_i64(&mut self) -> i64 {
        i64::from_le_bytes(self.read_array::<8>())
    }

    /// Reads a little-endian `f32` via its IEEE-754 bit pattern.
    #[inline]
    #[track_caller]
    pub fn read_f32(&mut self) -> f32 {
        f32::from_le_bytes(self.read_array::<4>())
    }

    /// Reads a little-endian `f64` via its IEEE-754 bit pattern.
    #[inline]
    #[track_caller]
    pub fn read_f64(&mut self) -> f64 {
        f64::from_le_bytes(self.read_array::<8>())
    }

    /// Advances the cursor by `len` bytes.
    #[inline]
    #[track_caller]
    pub fn advance(&mut self, len: usize) {
        self.pos += len;
    }
}

impl std::io::Read for ReadCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n_to_copy = core::cmp::min(buf.len(), self.len());
        let to_copy = self.read_slice(n_to_copy);
        buf[..n_to_copy].copy_from_slice(to_copy);
        Ok(n_to_copy)
    }
}

/// A cursor for writing bytes to a fixed buffer.
///
/// The encode entry points size the buffer with [`crate::Encode::size`]
/// beforehand, so well-behaved impls never run out of room; the
/// [`crate::ensure_size!`] guards exist to catch size/encode mismatches in
/// hand-written impls.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    inner: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Creates a new `WriteCursor` over a mutable byte slice.
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { inner: bytes, pos: 0 }
    }

    /// Returns the number of bytes remaining.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len() - self.pos
    }

    /// Returns `true` if there are no bytes remaining.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current position.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Writes an array of bytes.
    #[inline]
    #[track_caller]
    pub fn write_array<const N: usize>(&mut self, array: [u8; N]) {
        self.inner[self.pos..self.pos + N].copy_from_slice(&array);
        self.pos += N;
    }

    /// Writes a slice of bytes.
    #[inline]
    #[track_caller]
    pub fn write_slice(&mut self, slice: &[u8]) {
        let n = slice.len();
        self.inner[self.pos..self.pos + n].copy_from_slice(slice);
        self.pos += n;
    }

    /// Writes a `u8`.
    #[inline]
    #[track_caller]
    pub fn write_u8(&mut self, value: u8) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes an `i8`.
    #[inline]
    #[track_caller]
    pub fn write_i8(&mut self, value: i8) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `u16`.
    #[inline]
    #[track_caller]
    pub fn write_u16(&mut self, value: u16) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `i16`.
    #[inline]
    #[track_caller]
    pub fn write_i16(&mut self, value: i16) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `u32`.
    #[inline]
    #[track_caller]
    pub fn write_u32(&mut self, value: u32) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `i32`.
    #[inline]
    #[track_caller]
    pub fn write_i32(&mut self, value: i32) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `u64`.
    #[inline]
    #[track_caller]
    pub fn write_u64(&mut self, value: u64) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `i64`.
    #[inline]
    #[track_caller]
    pub fn write_i64(&mut self, value: i64) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `f32` via its IEEE-754 bit pattern.
    #[inline]
    #[track_caller]
    pub fn write_f32(&mut self, value: f32) {
        self.write_array(value.to_le_bytes())
    }

    /// Writes a little-endian `f64` via its IEEE-754 bit pattern.
    #[inline]
    #[track_caller]
    pub fn write_f64(&mut self, value: f64) {
        self.write_array(value.to_le_bytes())
    }

    /// Advances the cursor by `len` bytes.
    #[inline]
    #[track_caller]
    pub fn advance(&mut self, len: usize) {
        self.pos += len;
    }
}

impl std::io::Write for WriteCursor<'_> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
