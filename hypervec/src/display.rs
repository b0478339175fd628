use super::*;
use std::fmt;

/// Writes the leading dimension as a comma separated list: sub-views are wrapped in parentheses, elements of
/// the innermost dimension are written as they are.
fn write_nested<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    dims: &[usize],
    strides: &[usize],
    data: &[T],
) -> fmt::Result {
    let mut separator = "";

    if dims.len() == 1 {
        for value in data {
            write!(f, "{separator}{value}")?;
            separator = ", ";
        }
        return Ok(());
    }

    let stride = strides[0];
    for pos in 0..dims[0] {
        let start = pos * stride;
        write!(f, "{separator}(")?;
        write_nested(f, &dims[1..], &strides[1..], &data[start..start + stride])?;
        write!(f, ")")?;
        separator = ", ";
    }

    Ok(())
}

impl<T: fmt::Display, const N: usize> fmt::Display for View<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, self.shape(), self.strides(), self.as_slice())
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for ViewMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}
