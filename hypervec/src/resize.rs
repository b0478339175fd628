use super::*;
use tracing::trace;

impl<T, const N: usize> Array<T, N> {
    /// Replaces the shape and sets every element to `value`, discarding the previous contents.
    ///
    /// # Panics
    /// Panics if the number of elements in `shape` overflows `usize`. The array is left unchanged.
    pub fn assign(&mut self, shape: [usize; N], value: T)
    where
        T: Clone,
    {
        let size = shape::element_count(&shape);
        trace!(from = ?self.shape, to = ?shape, size, "assigning array storage");

        self.set_shape(shape);
        self.data.clear();
        self.data.resize(size, value);
    }

    /// Replaces the shape and resizes the flat storage to match it. New elements are set to `value` and
    /// appended at the end, surplus elements are truncated from the end.
    ///
    /// Elements keep their position in the flat storage, not their multi-index. Coordinates survive only when
    /// all leading extents multiply to 1 before and after the resize.
    ///
    /// # Panics
    /// Panics if the number of elements in `shape` overflows `usize`. The array is left unchanged.
    pub fn resize(&mut self, shape: [usize; N], value: T)
    where
        T: Clone,
    {
        let size = shape::element_count(&shape);
        trace!(from = ?self.shape, to = ?shape, old_size = self.data.len(), size, "resizing array storage");

        self.set_shape(shape);
        self.data.resize(size, value);
    }

    /// Same as [`Array::resize`] with default-initialized new elements.
    ///
    /// # Panics
    /// Panics if the number of elements in `shape` overflows `usize`.
    pub fn resize_default(&mut self, shape: [usize; N])
    where
        T: Default,
    {
        let size = shape::element_count(&shape);
        trace!(from = ?self.shape, to = ?shape, old_size = self.data.len(), size, "resizing array storage");

        self.set_shape(shape);
        self.data.resize_with(size, T::default);
    }

    /// Pre-allocates storage for an array of the given shape. The current shape and elements are unchanged.
    ///
    /// # Panics
    /// Panics if the number of elements in `shape` overflows `usize`.
    pub fn reserve(&mut self, shape: [usize; N]) {
        self.reserve_elements(shape::element_count(&shape));
    }

    /// Pre-allocates storage for at least `count` elements in total.
    pub fn reserve_elements(&mut self, count: usize) {
        let additional = count.saturating_sub(self.data.len());
        trace!(len = self.data.len(), count, "reserving array storage");

        self.data.reserve(additional);
    }

    /// Moves the contents out, leaving an empty array of shape `[0; N]` behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn set_shape(&mut self, shape: [usize; N]) {
        self.strides = shape::compute_strides(&shape);
        self.shape = shape;
    }
}
