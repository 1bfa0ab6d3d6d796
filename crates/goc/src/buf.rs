/// Capacity kept by [`WriteBuf::clear`]; anything beyond this is returned
/// to the allocator.
const RETAINED_CAPACITY: usize = 16 * 1024;

/// Growable byte sink the encode entry points fill in place.
///
/// The buffer tracks how much of its allocation is already filled with
/// produced bytes. [`unfilled_to`](WriteBuf::unfilled_to) hands out an
/// exact-sized window past the filled region, which is how
/// [`encode_to`](crate::encode_to) reserves
/// [`Encode::size`](crate::Encode::size) bytes up front and commits them
/// with [`advance`](WriteBuf::advance) once written. Streaming hooks write
/// through the `write_*` methods instead, growing the buffer as they go.
///
/// A `WriteBuf` can be reused across calls: [`clear`](WriteBuf::clear)
/// rewinds the filled region while keeping (a bounded amount of) the
/// allocation.
pub struct WriteBuf {
    inner: Vec<u8>,
    filled: usize,
}

impl WriteBuf {
    /// Constructs a new, empty `WriteBuf`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: Vec::new(),
            filled: 0,
        }
    }

    /// Constructs a `WriteBuf` reusing an existing allocation.
    #[inline]
    pub const fn from_vec(buffer: Vec<u8>) -> Self {
        Self {
            inner: buffer,
            filled: 0,
        }
    }

    /// Consumes the `WriteBuf`, returning the filled region as a `Vec<u8>`.
    #[inline]
    pub fn into_vec(mut self) -> Vec<u8> {
        self.inner.truncate(self.filled);
        self.inner
    }

    /// Returns the length of the filled region.
    #[inline]
    pub const fn filled_len(&self) -> usize {
        self.filled
    }

    /// Returns a shared reference to the filled region.
    #[inline]
    pub fn filled(&self) -> &[u8] {
        &self.inner[..self.filled]
    }

    /// Returns a mutable window over the next `n` unfilled bytes,
    /// allocating and zero-initializing as necessary.
    ///
    /// The window does not count as filled until [`advance`](WriteBuf::advance)
    /// is called.
    #[inline]
    pub fn unfilled_to(&mut self, n: usize) -> &mut [u8] {
        if self.inner.len() < self.filled + n {
            self.inner.resize(self.filled + n, 0);
        }

        &mut self.inner[self.filled..self.filled + n]
    }

    /// Grows the filled region by `len` bytes previously written through
    /// [`unfilled_to`](WriteBuf::unfilled_to).
    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.filled += len;
        debug_assert!(self.filled <= self.inner.len());
    }

    /// Appends a slice of bytes to the filled region.
    #[inline]
    pub fn write_slice(&mut self, slice: &[u8]) {
        self.unfilled_to(slice.len()).copy_from_slice(slice);
        self.filled += slice.len();
    }

    /// Appends an array of bytes to the filled region.
    #[inline]
    pub fn write_array<const N: usize>(&mut self, array: [u8; N]) {
        self.write_slice(&array);
    }

    /// Appends a single byte to the filled region.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.write_array([value]);
    }

    /// Rewinds the filled region to the beginning of the buffer.
    ///
    /// If the buffer grew big, it is shrunk in order to reclaim memory.
    #[inline]
    pub fn clear(&mut self) {
        self.filled = 0;
        self.inner.shrink_to(RETAINED_CAPACITY);
    }
}

impl Default for WriteBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for WriteBuf {
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
