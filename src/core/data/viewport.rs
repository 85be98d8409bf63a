use crate::core::data::complex::Complex;

/// A rectangular region of the complex plane sampled onto a pixel grid.
///
/// Row 0 is the top edge (largest imaginary part) and column 0 the left edge
/// (smallest real part). Sizes are kept signed so that degenerate requests pass
/// through unchanged; non-positive pixel sizes simply produce empty fields.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    width: f64,
    height: f64,
    pixel_width: i32,
    pixel_height: i32,
    max_iterations: i32,
}

impl Viewport {
    #[must_use]
    pub fn new(
        center: Complex,
        width: f64,
        height: f64,
        pixel_width: i32,
        pixel_height: i32,
        max_iterations: i32,
    ) -> Self {
        Self {
            center,
            width,
            height,
            pixel_width,
            pixel_height,
            max_iterations,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> i32 {
        self.pixel_height
    }

    #[must_use]
    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.pixel_width.max(0) as usize
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.pixel_height.max(0) as usize
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns() * self.rows()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn row_to_imag(&self, row: usize) -> f64 {
        self.center.imag + self.height / 2.0 - row as f64 * self.height / f64::from(self.pixel_height)
    }

    #[must_use]
    pub fn column_to_real(&self, column: usize) -> f64 {
        self.center.real - self.width / 2.0 + column as f64 * self.width / f64::from(self.pixel_width)
    }

    #[must_use]
    pub fn pixel_to_complex(&self, column: usize, row: usize) -> Complex {
        Complex::new(self.column_to_real(column), self.row_to_imag(row))
    }

    /// Same centre and resolution, with the plane extents divided by `factor`.
    #[must_use]
    pub fn zoomed_about(&self, factor: f64) -> Self {
        Self {
            width: self.width / factor,
            height: self.height / factor,
            ..*self
        }
    }
}
