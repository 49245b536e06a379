//! Additive mixing with hard clipping.
//!
//! Inputs are borrowed and never resized; every mix returns a new buffer.

/// Clamps a sample into [-1.0, 1.0].
#[inline]
pub fn hard_clip(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}

/// Mixes two sample sequences of possibly different lengths.
///
/// The shorter input is treated as if it were right-padded with silence.
/// The output has `max(a.len(), b.len())` samples, each equal to
/// `clamp(a[i] + b[i], -1.0, 1.0)`.
///
/// # Example
/// ```
/// use tonegen_backend_audio::mixer::transpose_samples;
///
/// let mixed = transpose_samples(&[0.5, 0.75], &[0.25, 0.5, -0.5]);
/// assert_eq!(mixed, vec![0.75, 1.0, -0.5]);
/// ```
pub fn transpose_samples(a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let sample_a = a.get(i).copied().unwrap_or(0.0);
            let sample_b = b.get(i).copied().unwrap_or(0.0);
            hard_clip(sample_a + sample_b)
        })
        .collect()
}

/// Mixes any number of sequences by folding [`transpose_samples`] left to
/// right.
///
/// Clipping is applied after every pairwise step, so the result can differ
/// from clipping a single overall sum when intermediate sums leave
/// [-1.0, 1.0]. An empty input yields an empty sequence.
pub fn mix_all<'a, I>(sequences: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut iter = sequences.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    // A single sequence still passes through the clipper.
    let start = transpose_samples(first, &[]);
    iter.fold(start, |acc, next| transpose_samples(&acc, next))
}
