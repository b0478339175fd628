use super::*;
use std::slice::{Iter, IterMut};
use std::vec::IntoIter;

impl<T, const N: usize> Array<T, N> {
    /// Returns an iterator over all elements in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator over mutable references to all elements in row-major order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for View<'a, T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &View<'a, T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for ViewMut<'a, T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (_, _, data) = self.into_parts();
        data.iter_mut()
    }
}

impl<'a, 'b, T, const N: usize> IntoIterator for &'b mut ViewMut<'a, T, N> {
    type Item = &'b mut T;
    type IntoIter = IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_iterator() -> Result<()> {
        let mut array = Array::<i32, 3>::new([4, 3, 2]);
        for (value, index) in array.iter_mut().zip(0..) {
            *value = index;
        }

        assert!(array.iter().copied().eq(0..24));
        assert_eq!(*array.at([3, 2, 1])?, 23);

        let mut sum = 0;
        for value in &array {
            sum += value;
        }
        assert_eq!(sum, (0..24).sum::<i32>());

        for value in &mut array {
            *value *= 2;
        }
        assert_eq!(array.into_iter().last(), Some(46));

        Ok(())
    }

    #[test]
    fn test_view_iterator() {
        let mut array = Array::from_shape_vec([2, 2, 2], (0..8).collect::<Vec<i32>>()).unwrap();

        let values: Vec<_> = array.slice(1).into_iter().copied().collect();
        assert_eq!(values, vec![4, 5, 6, 7]);

        for value in array.slice_mut(0) {
            *value += 10;
        }
        let mut view = array.view_mut();
        for value in &mut view {
            *value += 1;
        }

        assert_eq!(array.as_slice(), &[11, 12, 13, 14, 5, 6, 7, 8]);
    }

    #[test]
    fn test_iterate_over_empty_array() {
        let array = Array::<i32, 3>::new([3, 0, 3]);

        assert_eq!(array.iter().count(), 0);
        assert_eq!(array.view().iter().count(), 0);
    }
}
