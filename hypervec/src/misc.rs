use super::*;
use std::fmt;

/// Compares two views of the same rank whose element types may differ.
///
/// The views are equal when their shapes match and all elements match pairwise in row-major order.
pub fn eq<T, U, const N: usize>(lhs: &View<'_, T, N>, rhs: &View<'_, U, N>) -> bool
where
    T: PartialEq<U>,
{
    lhs.shape() == rhs.shape() && lhs.iter().zip(rhs.iter()).all(|(lhs, rhs)| lhs == rhs)
}

impl<'b, T: PartialEq<U>, U, const N: usize> PartialEq<View<'b, U, N>> for View<'_, T, N> {
    fn eq(&self, other: &View<'b, U, N>) -> bool {
        eq(self, other)
    }
}

impl<T: Eq, const N: usize> Eq for View<'_, T, N> {}

impl<'b, T: PartialEq<U>, U, const N: usize> PartialEq<ViewMut<'b, U, N>> for ViewMut<'_, T, N> {
    fn eq(&self, other: &ViewMut<'b, U, N>) -> bool {
        eq(&self.as_view(), &other.as_view())
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Array<U, N>> for Array<T, N> {
    fn eq(&self, other: &Array<U, N>) -> bool {
        eq(&self.view(), &other.view())
    }
}

impl<T: Eq, const N: usize> Eq for Array<T, N> {}

impl<'b, T: PartialEq<U>, U, const N: usize> PartialEq<View<'b, U, N>> for Array<T, N> {
    fn eq(&self, other: &View<'b, U, N>) -> bool {
        eq(&self.view(), other)
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Array<U, N>> for View<'_, T, N> {
    fn eq(&self, other: &Array<U, N>) -> bool {
        eq(self, &other.view())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape)
            .field("elements", &self.data)
            .finish()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for View<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("shape", &self.shape())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ViewMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewMut")
            .field("shape", &self.shape())
            .field("elements", &self.as_slice())
            .finish()
    }
}
