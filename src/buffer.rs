//! Post-processing of rendered sample buffers.
//!
//! Quantization saturates at the limits of the target format instead of failing; out-of-range
//! input is clipped silently.

use crate::{Error, Result, Sample};

/// Pair two mono channels into stereo frames: `left[0], right[0], left[1], right[1], ...`.
pub fn interleave(left: &[Sample], right: &[Sample]) -> Result<Vec<Sample>> {
    if left.len() != right.len() {
        return Err(Error::SizeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut frames = Vec::with_capacity(left.len() * 2);
    for (l, r) in left.iter().zip(right.iter()) {
        frames.push(*l);
        frames.push(*r);
    }
    Ok(frames)
}

/// Scale every sample by `factor`.
pub fn attenuate(buffer: &mut [Sample], factor: Sample) {
    for sample in buffer.iter_mut() {
        *sample *= factor;
    }
}

/// Quantize to unsigned 8-bit PCM, centered on 127.
pub fn compress_8(buffer: &[Sample]) -> Vec<u8> {
    buffer
        .iter()
        .map(|sample| {
            let scaled = (sample * 128.0 + 127.0) as i64;
            scaled.clamp(u8::MIN as i64, u8::MAX as i64) as u8
        })
        .collect()
}

/// Quantize to signed 16-bit PCM.
///
/// Full-scale positive input (`1.0`) scales to 32768 and is clipped to 32767, one step short of
/// the negative full scale.
pub fn compress_16(buffer: &[Sample]) -> Vec<i16> {
    buffer
        .iter()
        .map(|sample| {
            let scaled = (sample * 32768.0) as i64;
            scaled.clamp(i16::MIN as i64, i16::MAX as i64) as i16
        })
        .collect()
}
