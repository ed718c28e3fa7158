//! Shape-preserving application of scalar conversions.

/// Input that a scalar `f64 -> f64` conversion can be mapped over.
///
/// Scalars map to scalars, fixed arrays to fixed arrays of the same length,
/// and slices or vectors to a `Vec` of the same length. Borrowed input is
/// never modified; an owned `Vec` is reused for the output.
pub trait Elementwise {
    type Output;

    /// Apply `f` to every element, keeping the shape.
    fn map_elements<F: Fn(f64) -> f64>(self, f: F) -> Self::Output;
}

impl Elementwise for f64 {
    type Output = f64;

    fn map_elements<F: Fn(f64) -> f64>(self, f: F) -> f64 {
        f(self)
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    type Output = [f64; N];

    fn map_elements<F: Fn(f64) -> f64>(self, f: F) -> [f64; N] {
        self.map(f)
    }
}

impl<const N: usize> Elementwise for &[f64; N] {
    type Output = [f64; N];

    fn map_elements<F: Fn(f64) -> f64>(self, f: F) -> [f64; N] {
        (*self).map(f)
    }
}

impl Elementwise for &[f64] {
    type Output = Vec<f64>;

    fn map_elements<F: Fn(f64) -> f64>(self, f: F) -> Vec<f64> {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl Elementwise for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_elements<F: Fn(f64) -> f64>(self, f: F) -> Vec<f64> {
        self.as_slice().map_elements(f)
    }
}

impl Elementwise for Vec<f64> {
    type Output = Vec<f64>;

    fn map_elements<F: Fn(f64) -> f64>(mut self, f: F) -> Vec<f64> {
        for x in &mut self {
            *x = f(*x);
        }
        self
    }
}
