use std::time::Duration;

/// Rows per band when `height` rows are split into `parts` contiguous bands.
pub fn band_rows(height: usize, parts: usize) -> usize {
    height.div_ceil(parts.max(1)).max(1)
}

/// Sample value for the 8-bit raster formats.
/// Counts pass through unchanged while they already fit.
pub fn gray_level(count: u32, max_iter: u32) -> u8 {
    if max_iter <= u8::MAX as u32 {
        return count.min(u8::MAX as u32) as u8;
    }
    (count.min(max_iter) as u64 * u8::MAX as u64 / max_iter as u64) as u8
}

pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
