use thiserror::Error;

use crate::core::data::viewport::Viewport;

/// Cell value for points treated as members of the set.
pub const SENTINEL: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field of {pixel_width}x{pixel_height} pixels needs {expected} cells, got {actual}")]
    LengthMismatch {
        pixel_width: usize,
        pixel_height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Row-major escape counts, one cell per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    pixel_width: usize,
    pixel_height: usize,
    counts: Vec<i32>,
}

impl IterationField {
    #[must_use]
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            pixel_width: viewport.columns(),
            pixel_height: viewport.rows(),
            counts: vec![0; viewport.len()],
        }
    }

    pub fn from_counts(
        pixel_width: usize,
        pixel_height: usize,
        counts: Vec<i32>,
    ) -> Result<Self, FieldError> {
        let expected = pixel_width * pixel_height;

        if counts.len() != expected {
            return Err(FieldError::LengthMismatch {
                pixel_width,
                pixel_height,
                expected,
                actual: counts.len(),
            });
        }

        Ok(Self {
            pixel_width,
            pixel_height,
            counts,
        })
    }

    #[must_use]
    pub fn pixel_width(&self) -> usize {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> usize {
        self.pixel_height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> &[i32] {
        &self.counts
    }

    #[must_use]
    pub fn into_counts(self) -> Vec<i32> {
        self.counts
    }

    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<i32> {
        if column >= self.pixel_width || row >= self.pixel_height {
            return None;
        }

        self.counts.get(row * self.pixel_width + column).copied()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        if row >= self.pixel_height {
            return None;
        }

        let start = row * self.pixel_width;
        self.counts.get(start..start + self.pixel_width)
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.counts.iter().filter(|&&count| count == SENTINEL).count()
    }

    pub(crate) fn counts_mut(&mut self) -> &mut [i32] {
        &mut self.counts
    }
}
