use super::*;
use std::slice::{Iter, IterMut};

/// A read-only view of rank N into storage owned by an [`Array`].
///
/// The view borrows the trailing N entries of the owner's shape and strides together with the contiguous run of
/// elements it covers. Row-major layout guarantees that the elements of any sub-view are stored back to back,
/// so the run starts at the view's first element and spans exactly [`View::size`] elements.
pub struct View<'a, T, const N: usize> {
    shape: &'a [usize],
    strides: &'a [usize],
    data: &'a [T],
}

/// A read-write view of rank N into storage owned by an [`Array`].
///
/// Converts into a [`View`] through [`ViewMut::as_view`] or `From`, never the other way around.
pub struct ViewMut<'a, T, const N: usize> {
    shape: &'a [usize],
    strides: &'a [usize],
    data: &'a mut [T],
}

impl<T, const N: usize> Clone for View<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for View<'_, T, N> {}

impl<'a, T, const N: usize> View<'a, T, N> {
    pub(crate) fn new(shape: &'a [usize], strides: &'a [usize], data: &'a [T]) -> Self {
        debug_assert_eq!(shape.len(), N);
        debug_assert_eq!(strides.len(), N);
        debug_assert_eq!(data.len(), shape::element_count(shape));

        Self { shape, strides, data }
    }

    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    pub fn strides(&self) -> &'a [usize] {
        self.strides
    }

    /// Returns the number of elements covered by this view.
    pub fn size(&self) -> usize {
        shape::element_count(self.shape)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the extent of the dimension `dim`, or an error if the view has no such dimension.
    pub fn extent(&self, dim: usize) -> Result<usize> {
        shape::checked_extent(self.shape, dim)
    }

    /// Returns the extent of the dimension `D`, checked at compile time.
    pub fn size_of<const D: usize>(&self) -> usize {
        const { assert!(D < N, "dimension out of range") };
        self.shape[D]
    }

    /// Projects a multi-index onto the view's elements without checking bounds.
    pub fn offset_of(&self, index: [usize; N]) -> usize {
        shape::flat_index(self.strides, &index)
    }

    /// Returns the element at the given multi-index.
    pub fn at(&self, index: [usize; N]) -> Result<&'a T> {
        let offset = shape::checked_flat_index(self.shape, self.strides, &index)?;
        Ok(&self.data[offset])
    }

    /// Returns the elements covered by this view in row-major order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> ViewMut<'a, T, N> {
    pub(crate) fn new(shape: &'a [usize], strides: &'a [usize], data: &'a mut [T]) -> Self {
        debug_assert_eq!(shape.len(), N);
        debug_assert_eq!(strides.len(), N);
        debug_assert_eq!(data.len(), shape::element_count(shape));

        Self { shape, strides, data }
    }

    /// Returns a read-only view of the same elements.
    pub fn as_view(&self) -> View<'_, T, N> {
        View::new(self.shape, self.strides, &*self.data)
    }

    /// Returns a shorter-lived read-write view of the same elements.
    pub fn reborrow(&mut self) -> ViewMut<'_, T, N> {
        ViewMut::new(self.shape, self.strides, &mut *self.data)
    }

    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    pub fn strides(&self) -> &'a [usize] {
        self.strides
    }

    pub fn size(&self) -> usize {
        shape::element_count(self.shape)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn extent(&self, dim: usize) -> Result<usize> {
        shape::checked_extent(self.shape, dim)
    }

    pub fn size_of<const D: usize>(&self) -> usize {
        const { assert!(D < N, "dimension out of range") };
        self.shape[D]
    }

    pub fn offset_of(&self, index: [usize; N]) -> usize {
        shape::flat_index(self.strides, &index)
    }

    pub fn at(&self, index: [usize; N]) -> Result<&T> {
        let offset = shape::checked_flat_index(self.shape, self.strides, &index)?;
        Ok(&self.data[offset])
    }

    pub fn at_mut(&mut self, index: [usize; N]) -> Result<&mut T> {
        let offset = shape::checked_flat_index(self.shape, self.strides, &index)?;
        Ok(&mut self.data[offset])
    }

    /// Consumes the view and returns the element at the given multi-index with the view's full lifetime.
    pub fn into_at_mut(self, index: [usize; N]) -> Result<&'a mut T> {
        let (dims, strides, data) = self.into_parts();
        let offset = shape::checked_flat_index(dims, strides, &index)?;
        Ok(&mut data[offset])
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Splits the view into its parts, used when descending into a sub-view.
    pub(crate) fn into_parts(self) -> (&'a [usize], &'a [usize], &'a mut [T]) {
        (self.shape, self.strides, self.data)
    }
}

impl<'a, T, const N: usize> From<ViewMut<'a, T, N>> for View<'a, T, N> {
    fn from(view: ViewMut<'a, T, N>) -> Self {
        let (dims, strides, data) = view.into_parts();
        View::new(dims, strides, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_access() -> Result<()> {
        let array = Array::from_shape_vec([2, 3], (0..6).collect::<Vec<i32>>())?;
        let view = array.view();

        assert_eq!(view.shape(), &[2, 3]);
        assert_eq!(view.strides(), &[3, 1]);
        assert_eq!(view.size(), 6);
        assert_eq!(view.size_of::<1>(), 3);
        assert_eq!(view.extent(0)?, 2);
        assert!(view.extent(2).is_err());
        assert_eq!(*view.at([1, 2])?, 5);
        assert_eq!(view.offset_of([1, 1]), 4);
        assert!(view.at([2, 0]).is_err());

        Ok(())
    }

    #[test]
    fn test_view_mut_writes_through() -> Result<()> {
        let mut array = Array::<i32, 2>::new([2, 2]);

        {
            let mut view = array.view_mut();
            *view.at_mut([0, 1])? = 1;
            *view.at_mut([1, 0])? = 2;
            assert!(view.at_mut([0, 2]).is_err());
            assert_eq!(*view.at([1, 0])?, 2);
        }
        *array.view_mut().into_at_mut([1, 1])? = 3;

        assert_eq!(array.as_slice(), &[0, 1, 2, 3]);

        Ok(())
    }

    #[test]
    fn can_widen_view_mut_to_view() -> Result<()> {
        let mut array = Array::from_elem([2, 2], 'x');
        let mut view_mut = array.view_mut();

        let widened = view_mut.as_view();
        assert_eq!(*widened.at([1, 1])?, 'x');

        let reborrowed = view_mut.reborrow();
        let view: View<'_, char, 2> = reborrowed.into();
        assert_eq!(view.size(), 4);
        assert_eq!(view.as_slice(), &['x'; 4]);

        Ok(())
    }
}
