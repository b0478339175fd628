//! Library crate for hypervec
//!

mod constructive;
mod display;
mod error;
mod iterator;
mod misc;
mod resize;
mod shape;
mod slicing;
mod view;

pub use crate::constructive::Nested;
pub use crate::error::HyperError;
pub use crate::misc::eq;
pub use crate::view::{View, ViewMut};

pub type Result<T> = std::result::Result<T, error::HyperError>;

/// Represents a dense multi-dimensional array with generic element type T and a fixed rank N.
///
/// Elements are stored as one contiguous block of memory in row-major order. The shape holds the extent of
/// every dimension, the strides are derived from it: the last dimension has stride 1 and every other dimension
/// advances by the product of all extents following it. Subscripting creates views which borrow the array's
/// shape, strides and storage instead of copying them.
///
/// # Resizing
/// [`Array::resize`] reshapes the flat buffer linearly: elements keep their position in storage, not their
/// coordinate. Elements keep their multi-index only when all leading extents multiply to 1.
///
/// # Slicing
/// `slice` and `slice_mut` are provided for ranks 2 to 8 only. Arrays of a higher rank are still accessible
/// through [`Array::at`], [`Array::at_mut`] and iteration, but cannot be sliced one dimension at a time.
#[derive(Clone)]
pub struct Array<T, const N: usize> {
    data: Vec<T>,
    shape: [usize; N],
    strides: [usize; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Wraps storage whose length is already known to match the shape.
    fn from_parts(shape: [usize; N], data: Vec<T>) -> Self {
        const { assert!(N > 0, "array rank must be at least 1") };
        debug_assert_eq!(data.len(), shape::element_count(&shape));

        Self {
            data,
            shape,
            strides: shape::compute_strides(&shape),
        }
    }

    /// Returns a read-only view over the whole array.
    pub fn view(&self) -> View<'_, T, N> {
        View::new(&self.shape, &self.strides, &self.data)
    }

    /// Returns a read-write view over the whole array.
    pub fn view_mut(&mut self) -> ViewMut<'_, T, N> {
        ViewMut::new(&self.shape, &self.strides, &mut self.data)
    }

    /// Returns the extent of every dimension.
    pub fn shape(&self) -> &[usize; N] {
        &self.shape
    }

    /// Returns the number of storage slots to advance per unit of each dimension.
    pub fn strides(&self) -> &[usize; N] {
        &self.strides
    }

    /// Returns the total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the extent of the dimension `dim`, or an error if the array has no such dimension.
    pub fn extent(&self, dim: usize) -> Result<usize> {
        self.view().extent(dim)
    }

    /// Returns the extent of the dimension `D`, checked at compile time.
    pub fn size_of<const D: usize>(&self) -> usize {
        const { assert!(D < N, "dimension out of range") };
        self.shape[D]
    }

    /// Projects a multi-index onto the flat storage without checking bounds.
    pub fn offset_of(&self, index: [usize; N]) -> usize {
        shape::flat_index(&self.strides, &index)
    }

    /// Returns the element at the given multi-index.
    pub fn at(&self, index: [usize; N]) -> Result<&T> {
        let offset = shape::checked_flat_index(&self.shape, &self.strides, &index)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at the given multi-index.
    pub fn at_mut(&mut self, index: [usize; N]) -> Result<&mut T> {
        let offset = shape::checked_flat_index(&self.shape, &self.strides, &index)?;
        Ok(&mut self.data[offset])
    }

    /// Returns the flat storage in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the flat storage in row-major order for modification.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the array and returns its flat storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
