use super::*;
use std::ops::{Index, IndexMut, Range};

/// Moves one dimension down: returns the element range of the sub-view at `pos` together with the trailing
/// shape and strides. The position is not checked against the extent of the leading dimension.
fn descend<'a>(dims: &'a [usize], strides: &'a [usize], pos: usize) -> (Range<usize>, &'a [usize], &'a [usize]) {
    let stride = strides[0];
    let start = pos * stride;
    (start..start + stride, &dims[1..], &strides[1..])
}

// Stable const generics cannot express `N - 1`, so every rank gets its own descending impls.
macro_rules! impl_slicing {
    ($($rank:literal => $lower:literal),+ $(,)?) => {
        $(
            impl<'a, T> View<'a, T, $rank> {
                /// Returns the sub-view at position `pos` of the leading dimension.
                ///
                /// The sub-view shares this view's shape and strides, no data is copied.
                ///
                /// # Panics
                /// Panics if `pos` addresses elements outside of this view.
                pub fn slice(&self, pos: usize) -> View<'a, T, $lower> {
                    let data = self.as_slice();
                    let (range, dims, strides) = descend(self.shape(), self.strides(), pos);
                    View::new(dims, strides, &data[range])
                }
            }

            impl<'a, T> ViewMut<'a, T, $rank> {
                /// Returns the read-only sub-view at position `pos` of the leading dimension.
                pub fn slice(&self, pos: usize) -> View<'_, T, $lower> {
                    self.as_view().slice(pos)
                }

                /// Returns the read-write sub-view at position `pos` of the leading dimension.
                pub fn slice_mut(&mut self, pos: usize) -> ViewMut<'_, T, $lower> {
                    self.reborrow().into_slice(pos)
                }

                /// Consumes the view and returns the read-write sub-view at position `pos`.
                pub fn into_slice(self, pos: usize) -> ViewMut<'a, T, $lower> {
                    let (dims, strides, data) = self.into_parts();
                    let (range, dims, strides) = descend(dims, strides, pos);
                    ViewMut::new(dims, strides, &mut data[range])
                }
            }

            impl<T> Array<T, $rank> {
                /// Returns the sub-view at position `pos` of the leading dimension.
                ///
                /// # Panics
                /// Panics if `pos` addresses elements outside of the array.
                pub fn slice(&self, pos: usize) -> View<'_, T, $lower> {
                    self.view().slice(pos)
                }

                pub fn slice_mut(&mut self, pos: usize) -> ViewMut<'_, T, $lower> {
                    self.view_mut().into_slice(pos)
                }
            }
        )+
    };
}

impl_slicing!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

impl<T> Index<usize> for View<'_, T, 1> {
    type Output = T;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.as_slice()[pos]
    }
}

impl<T> Index<usize> for ViewMut<'_, T, 1> {
    type Output = T;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.as_slice()[pos]
    }
}

impl<T> IndexMut<usize> for ViewMut<'_, T, 1> {
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[pos]
    }
}

impl<T> Index<usize> for Array<T, 1> {
    type Output = T;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.as_slice()[pos]
    }
}

impl<T> IndexMut<usize> for Array<T, 1> {
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_3d_test_array() -> Result<Array<i32, 3>> {
        Array::from_shape_vec([4, 3, 2], (0..24).collect())
    }

    #[test]
    fn test_subscript_matches_at() -> Result<()> {
        let mut array = Array::<i32, 3>::new([4, 3, 2]);

        let mut value = 0;
        for x in 0..4 {
            for y in 0..3 {
                for z in 0..2 {
                    array.slice_mut(x).slice_mut(y)[z] = value;
                    assert_eq!(array.slice(x).slice(y)[z], value);
                    assert_eq!(*array.at([x, y, z])?, value);
                    value += 1;
                }
            }
        }

        assert_eq!(array, create_3d_test_array()?);

        Ok(())
    }

    #[test]
    fn test_slice_shares_trailing_shape() -> Result<()> {
        let array = create_3d_test_array()?;

        let slice = array.slice(2);
        assert_eq!(slice.shape(), &[3, 2]);
        assert_eq!(slice.strides(), &[2, 1]);
        assert_eq!(slice.size(), 6);
        assert_eq!(slice.as_slice(), &[12, 13, 14, 15, 16, 17]);
        assert_eq!(*slice.at([1, 1])?, *array.at([2, 1, 1])?);

        let row = slice.slice(1);
        assert_eq!(row.shape(), &[2]);
        assert_eq!(row.as_slice(), &[14, 15]);
        assert_eq!(row[0], 14);

        Ok(())
    }

    #[test]
    fn can_iterate_over_sub_view() -> Result<()> {
        let array = create_3d_test_array()?;
        let slice = array.slice(3);

        assert!(slice.iter().copied().eq(18..24));
        assert_eq!(slice.iter().count(), slice.size());

        Ok(())
    }

    #[test]
    fn test_slice_mut_writes_through() -> Result<()> {
        let mut array = create_3d_test_array()?;

        {
            let mut slice = array.slice_mut(1);
            assert_eq!(slice.slice(0).as_slice(), &[6, 7]);
            slice.iter_mut().for_each(|value| *value = -*value);
            slice.slice_mut(2)[1] = 100;
        }

        assert_eq!(array.slice(1).as_slice(), &[-6, -7, -8, -9, -10, 100]);
        assert_eq!(*array.at([0, 2, 1])?, 5);
        assert_eq!(*array.at([2, 0, 0])?, 12);

        Ok(())
    }

    #[test]
    fn can_descend_rank_four_chain() -> Result<()> {
        let mut array = Array::<String, 4>::from_elem([5, 4, 3, 2], "0".to_string());

        let mut counter = 0;
        for w in 0..array.size_of::<0>() {
            for x in 0..array.size_of::<1>() {
                for y in 0..array.size_of::<2>() {
                    for z in 0..array.size_of::<3>() {
                        array.slice_mut(w).slice_mut(x).slice_mut(y)[z] = counter.to_string();
                        counter += 1;
                    }
                }
            }
        }

        assert!(array.iter().map(|value| value.parse::<usize>().unwrap()).eq(0..120));
        assert_eq!(array.slice(4).slice(3).slice(2)[1], "119");

        Ok(())
    }

    #[test]
    fn test_rank_one_index() {
        let mut array = Array::from(vec![1, 2, 3]);
        array[1] = 20;

        assert_eq!(array[0], 1);
        assert_eq!(array[1], 20);
        assert_eq!(array.view()[2], 3);

        let mut view = array.view_mut();
        view[2] = 30;
        assert_eq!(view[2], 30);
    }

    #[test]
    fn test_slice_with_empty_trailing_dimension() {
        let array = Array::<i32, 3>::new([3, 0, 3]);

        let slice = array.slice(1);
        assert_eq!(slice.shape(), &[0, 3]);
        assert_eq!(slice.size(), 0);
        assert!(slice.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_slice_out_of_range_panics() {
        let array = Array::<i32, 2>::new([2, 3]);
        let _ = array.slice(2);
    }
}
