pub mod grid;
mod internal_util;
pub mod params;
pub mod raster;
pub mod trial;

pub use grid::{
    schedule::{GridScheduler, Schedule, SchedulerError},
    EscapeGrid, GridError,
};
pub use params::{ParameterError, RenderParameters};
pub use trial::{trial_line, TrialHarness, TrialReport};

/// Squared orbit magnitude at which a point counts as escaped.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Width of the view window on both axes, centered on the origin.
pub const VIEW_SPAN: f64 = 4.0;

/// A point on the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Map the pixel at (`row`, `col`) of a `width` x `height` grid onto the view window.
    /// The grid center lands on the origin.
    pub fn from_pixel(row: usize, col: usize, width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            real: (col as f64 - w / 2.0) * VIEW_SPAN / w,
            imag: (row as f64 - h / 2.0) * VIEW_SPAN / h,
        }
    }

    pub fn conj(&self) -> Self {
        Self::new(self.real, -self.imag)
    }
}

/// Number of passes of `z <- z^2 + c` (from `z = 0`) until the orbit leaves the
/// radius-2 disc, capped at `max_iter`.
///
/// The loop body always runs once and the magnitude test looks at the orbit
/// value entering each pass, so the result lies in `[1, max_iter]` and a point
/// already outside the disc reports 2.
pub fn escape_time(c: Complex, max_iter: u32) -> u32 {
    let (mut z_real, mut z_imag) = (0.0_f64, 0.0_f64);
    let mut iter = 0;
    loop {
        let z_real2 = z_real * z_real;
        let z_imag2 = z_imag * z_imag;
        z_imag = 2.0 * z_real * z_imag + c.imag;
        z_real = z_real2 - z_imag2 + c.real;
        let lengthsq = z_real2 + z_imag2;
        iter += 1;
        if iter >= max_iter || lengthsq >= ESCAPE_RADIUS_SQ {
            return iter;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 255), 255);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1000), 1000);
    }

    #[test]
    fn test_far_point_escapes_after_first_check() {
        assert_eq!(escape_time(Complex::new(10.0, 10.0), 255), 2);
        assert_eq!(escape_time(Complex::new(2.0, 2.0), 255), 2);
    }

    #[test]
    fn test_known_points() {
        // -1 cycles between -1 and 0
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 255), 255);
        // 1 -> 2 -> 5: |1|^2 and |2|^2 are tested on passes 2 and 3
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 255), 3);
        // |z|^2 == 4 already counts as escaped
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 255), 2);
    }

    #[test]
    fn test_bound_of_one() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1), 1);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 1);
    }

    #[test]
    fn test_conjugate_symmetry() {
        let points = [(-0.75, 0.1), (0.25, 0.5), (-1.25, 0.03), (0.3, -0.6)];
        for (re, im) in points {
            let c = Complex::new(re, im);
            assert_eq!(escape_time(c, 500), escape_time(c.conj(), 500));
        }
    }

    #[test]
    fn test_from_pixel() {
        assert_eq!(Complex::from_pixel(240, 320, 640, 480), Complex::new(0.0, 0.0));
        assert_eq!(Complex::from_pixel(0, 0, 640, 480), Complex::new(-2.0, -2.0));

        let c = Complex::from_pixel(479, 639, 640, 480);
        assert!((c.real - (2.0 - 4.0 / 640.0)).abs() < 1e-12);
        assert!((c.imag - (2.0 - 4.0 / 480.0)).abs() < 1e-12);
    }
}
