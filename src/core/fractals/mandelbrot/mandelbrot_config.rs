use crate::core::{
    actions::compute_field::compute_strategy::ComputeStrategy,
    data::{complex::Complex, viewport::Viewport},
};

const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
const DEFAULT_WIDTH: f64 = 3.5;
const DEFAULT_HEIGHT: f64 = 2.0;
const DEFAULT_PIXEL_WIDTH: i32 = 800;
const DEFAULT_PIXEL_HEIGHT: i32 = 600;
const DEFAULT_MAX_ITERATIONS: i32 = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub center: Complex,
    pub width: f64,
    pub height: f64,
    pub pixel_width: i32,
    pub pixel_height: i32,
    pub max_iterations: i32,
    pub strategy: ComputeStrategy,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            strategy: ComputeStrategy::default(),
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.center,
            self.width,
            self.height,
            self.pixel_width,
            self.pixel_height,
            self.max_iterations,
        )
    }
}
