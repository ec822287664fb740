//! Parallel filter application using Rayon.
//!
//! Same contract as [`FilterChain::apply_to_pixels`], with pixels spread
//! across the Rayon thread pool.
//!
//! # Example
//!
//! ```rust
//! use colorfx_ops::{parallel, FilterChain};
//!
//! let chain: FilterChain = "grayscale(1) sepia(0.5)".parse().unwrap();
//! let mut pixels = vec![0.5f32; 256 * 256 * 4];
//! parallel::apply_to_pixels(&chain, &mut pixels, 4).unwrap();
//! ```

use crate::chain::{check_pixel_layout, transform_pixel};
use crate::{FilterChain, OpsResult};
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Pixels per Rayon task.
const PIXELS_PER_TASK: usize = 4096;

/// Parallel version of [`FilterChain::apply_to_pixels`].
pub fn apply_to_pixels(chain: &FilterChain, pixels: &mut [f32], channels: usize) -> OpsResult<()> {
    trace!(len = pixels.len(), channels, operations = chain.len(), "parallel::apply_to_pixels");
    check_pixel_layout(pixels.len(), channels)?;
    if chain.is_empty() {
        return Ok(());
    }
    debug!(chain = %chain, pixels = pixels.len() / channels, "Applying filter chain in parallel");

    let matrices = chain.matrices();
    pixels
        .par_chunks_mut(PIXELS_PER_TASK * channels)
        .try_for_each(|block| match channels {
            3 => block
                .chunks_exact_mut(3)
                .try_for_each(|pixel| transform_pixel::<3>(pixel, &matrices)),
            _ => block
                .chunks_exact_mut(4)
                .try_for_each(|pixel| transform_pixel::<4>(pixel, &matrices)),
        })
}
