use super::*;

/// Returns the number of elements described by a shape, failing if the product of its non-zero extents
/// overflows `usize`.
///
/// Zero extents are skipped while checking so that every stride derived from the shape fits as well.
pub(crate) fn checked_element_count(shape: &[usize]) -> Result<usize> {
    let nonzero = shape
        .iter()
        .filter(|&&extent| extent != 0)
        .try_fold(1usize, |count, &extent| count.checked_mul(extent))
        .ok_or_else(|| HyperError::InvalidShape(format!("Number of elements in shape {shape:?} overflows usize")))?;

    Ok(if shape.contains(&0) { 0 } else { nonzero })
}

/// Returns the number of elements described by a shape.
///
/// # Panics
/// Panics if the number of elements overflows `usize`.
pub(crate) fn element_count(shape: &[usize]) -> usize {
    checked_element_count(shape).unwrap_or_else(|error| panic!("{error}"))
}

/// Computes row-major strides: the last dimension is contiguous and every other dimension advances by the
/// product of the extents following it.
pub(crate) fn compute_strides<const N: usize>(shape: &[usize; N]) -> [usize; N] {
    let mut strides = [1; N];
    for dim in (0..N.saturating_sub(1)).rev() {
        strides[dim] = strides[dim + 1] * shape[dim + 1];
    }
    strides
}

/// Projects a multi-index onto a flat offset. Bounds are not checked.
pub(crate) fn flat_index(strides: &[usize], index: &[usize]) -> usize {
    index.iter().zip(strides).map(|(idx, stride)| idx * stride).sum()
}

/// Projects a multi-index onto a flat offset, failing if any index exceeds its extent.
pub(crate) fn checked_flat_index(shape: &[usize], strides: &[usize], index: &[usize]) -> Result<usize> {
    debug_assert_eq!(shape.len(), index.len());

    let mut linear_index = 0;
    for (dim, (&idx, (&size, &stride))) in index.iter().zip(shape.iter().zip(strides)).enumerate() {
        if idx >= size {
            return Err(HyperError::IndexOutOfRange(format!(
                "Index {idx} out of range for dimension {dim} with size {size}"
            )));
        }
        linear_index += idx * stride;
    }
    Ok(linear_index)
}

/// Returns the extent of `dim`, failing if the shape has no such dimension.
pub(crate) fn checked_extent(shape: &[usize], dim: usize) -> Result<usize> {
    shape.get(dim).copied().ok_or_else(|| {
        HyperError::IndexOutOfRange(format!(
            "Dimension {dim} out of range for rank {}",
            shape.len()
        ))
    })
}
