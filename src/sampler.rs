/// Pixels whose alpha channel is below this value are excluded from sampling
/// so that a mostly-transparent background cannot bias the palette.
pub const ALPHA_THRESHOLD: u8 = 10;

/// Collect clustering samples from an interleaved RGBA byte buffer.
///
/// The buffer is visited at a stride of `4 * sample_step` bytes, taking every
/// `sample_step`-th pixel and dropping near-transparent ones (alpha below
/// [`ALPHA_THRESHOLD`]). A `sample_step` of 0 is treated as 1. Returns an
/// empty vec when no pixel survives filtering.
pub fn collect_samples(rgba: &[u8], sample_step: usize) -> Vec<(u8, u8, u8)> {
    let step = sample_step.max(1);
    let mut samples = Vec::with_capacity(rgba.len() / (4 * step));

    for pixel in rgba.chunks_exact(4).step_by(step) {
        if pixel[3] >= ALPHA_THRESHOLD {
            samples.push((pixel[0], pixel[1], pixel[2]));
        }
    }

    samples
}
