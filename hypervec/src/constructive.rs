use super::*;

/// A nested list literal: every level of nesting fixes the extent of one dimension.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Records the length of every list in `extents`, indexed by nesting depth, and checks that lists at the
    /// same depth agree and that elements appear only at the innermost depth.
    fn measure(&self, depth: usize, extents: &mut [Option<usize>]) -> Result<()> {
        let rank = extents.len();

        match self {
            Nested::Leaf(_) if depth == rank => Ok(()),
            Nested::Leaf(_) => Err(HyperError::InvalidShape(format!(
                "Element found at depth {depth}, expected depth {rank}"
            ))),
            Nested::List(_) if depth == rank => Err(HyperError::InvalidShape(format!(
                "List nested deeper than rank {rank}"
            ))),
            Nested::List(items) => {
                match extents[depth] {
                    Some(extent) if extent != items.len() => {
                        return Err(HyperError::InvalidShape(format!(
                            "Unequal list sizes at depth {depth}: {extent} != {}",
                            items.len()
                        )));
                    }
                    Some(_) => {}
                    None => extents[depth] = Some(items.len()),
                }

                items.iter().try_for_each(|item| item.measure(depth + 1, extents))
            }
        }
    }

    fn flatten_into(self, data: &mut Vec<T>) {
        match self {
            Nested::Leaf(value) => data.push(value),
            Nested::List(items) => items.into_iter().for_each(|item| item.flatten_into(data)),
        }
    }
}

fn leaves<T>(list: Vec<T>) -> Nested<T> {
    Nested::List(list.into_iter().map(Nested::Leaf).collect())
}

impl<T, const N: usize> Array<T, N> {
    /// Creates an array of the given shape with default-initialized elements.
    ///
    /// # Panics
    /// Panics if the number of elements in `shape` overflows `usize`.
    pub fn new(shape: [usize; N]) -> Self
    where
        T: Default,
    {
        let data = std::iter::repeat_with(T::default)
            .take(shape::element_count(&shape))
            .collect();
        Self::from_parts(shape, data)
    }

    /// Creates an array of the given shape with every element set to `value`.
    ///
    /// # Panics
    /// Panics if the number of elements in `shape` overflows `usize`.
    pub fn from_elem(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let data = vec![value; shape::element_count(&shape)];
        Self::from_parts(shape, data)
    }

    /// Creates an array of the given shape over existing row-major storage.
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self> {
        let expected = shape::checked_element_count(&shape)?;
        if data.len() != expected {
            return Err(HyperError::InvalidShape(format!(
                "Cannot create array of shape {shape:?} from {} elements, expected {expected}",
                data.len()
            )));
        }

        Ok(Self::from_parts(shape, data))
    }

    /// Creates an array from a nested list literal, inferring the shape from its nesting.
    ///
    /// The nesting depth must equal the rank and all lists at the same depth must have the same length.
    /// Elements are stored in left-to-right order.
    pub fn try_from_nested(nested: Nested<T>) -> Result<Self> {
        let mut extents = [None; N];
        nested.measure(0, &mut extents)?;

        let shape = extents.map(|extent| extent.unwrap_or(0));
        let mut data = Vec::with_capacity(shape::checked_element_count(&shape)?);
        nested.flatten_into(&mut data);

        Ok(Self::from_parts(shape, data))
    }
}

impl<T, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::from_parts([0; N], Vec::new())
    }
}

impl<T> From<Vec<T>> for Array<T, 1> {
    fn from(data: Vec<T>) -> Self {
        Self::from_parts([data.len()], data)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Array<T, 2> {
    type Error = HyperError;

    fn try_from(list: Vec<Vec<T>>) -> Result<Self> {
        Array::try_from_nested(Nested::List(list.into_iter().map(leaves).collect()))
    }
}

impl<T> TryFrom<Vec<Vec<Vec<T>>>> for Array<T, 3> {
    type Error = HyperError;

    fn try_from(list: Vec<Vec<Vec<T>>>) -> Result<Self> {
        Array::try_from_nested(Nested::List(
            list.into_iter()
                .map(|rows| Nested::List(rows.into_iter().map(leaves).collect()))
                .collect(),
        ))
    }
}

/// Creates an array from a nested list literal of rank 1 to 4, returning [`Result`].
///
/// ```
/// let array = hypervec::hypervec![[1, 2, 3], [4, 5, 6]].unwrap();
/// assert_eq!(array.shape(), &[2, 3]);
/// ```
#[macro_export]
macro_rules! hypervec {
    ($([$([$([$($x:expr),* $(,)?]),+ $(,)?]),+ $(,)?]),+ $(,)?) => {
        $crate::Array::<_, 4>::try_from_nested($crate::Nested::List(::std::vec![$(
            $crate::Nested::List(::std::vec![$(
                $crate::Nested::List(::std::vec![$(
                    $crate::Nested::List(::std::vec![$($crate::Nested::Leaf($x)),*])
                ),+])
            ),+])
        ),+]))
    };
    ($([$([$($x:expr),* $(,)?]),+ $(,)?]),+ $(,)?) => {
        $crate::Array::<_, 3>::try_from_nested($crate::Nested::List(::std::vec![$(
            $crate::Nested::List(::std::vec![$(
                $crate::Nested::List(::std::vec![$($crate::Nested::Leaf($x)),*])
            ),+])
        ),+]))
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Array::<_, 2>::try_from_nested($crate::Nested::List(::std::vec![$(
            $crate::Nested::List(::std::vec![$($crate::Nested::Leaf($x)),*])
        ),+]))
    };
    ($($x:expr),* $(,)?) => {
        $crate::Array::<_, 1>::try_from_nested($crate::Nested::List(::std::vec![$($crate::Nested::Leaf($x)),*]))
    };
}
