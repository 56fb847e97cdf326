//! Sample generators for the noise-based cues.

/// Buffer length for `seconds` of audio
pub fn sample_count(sample_rate: f32, seconds: f32) -> usize {
    (sample_rate * seconds).floor().max(1.0) as usize
}

/// White noise with a `(1 - i/n)^power` decay envelope
pub fn decaying_noise(len: usize, power: i32, mut rng: impl FnMut() -> f32) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let envelope = (1.0 - i as f32 / len as f32).powi(power);
            (rng() * 2.0 - 1.0) * envelope
        })
        .collect()
}

/// Flat white noise in [-1, 1]
pub fn white_noise(len: usize, mut rng: impl FnMut() -> f32) -> Vec<f32> {
    (0..len).map(|_| rng() * 2.0 - 1.0).collect()
}

/// Mostly silent buffer with random pops (`density` is the chance per sample)
pub fn sparse_noise(len: usize, density: f32, amplitude: f32, mut rng: impl FnMut() -> f32) -> Vec<f32> {
    (0..len)
        .map(|_| {
            if rng() < density {
                (rng() * 2.0 - 1.0) * amplitude
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic generator cycling through fixed values
    fn cycle(values: &'static [f32]) -> impl FnMut() -> f32 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(48000.0, 0.035), 1680);
        assert_eq!(sample_count(44100.0, 0.0), 1);
    }

    #[test]
    fn test_decaying_noise_envelope() {
        let data = decaying_noise(4, 1, cycle(&[1.0]));
        assert_eq!(data, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_noise_range() {
        let data = white_noise(64, cycle(&[0.0, 0.25, 0.999]));
        assert!(data.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert_eq!(data[0], -1.0);
    }

    #[test]
    fn test_sparse_noise_density() {
        // rng alternates: gate draw 0.5 (>= density) -> silence every sample
        let silent = sparse_noise(10, 0.1, 1.0, cycle(&[0.5]));
        assert!(silent.iter().all(|s| *s == 0.0));
        // gate draw 0.0 passes, value draw 1.0 -> full amplitude
        let loud = sparse_noise(3, 0.1, 0.6, cycle(&[0.0, 1.0]));
        assert!(loud.iter().all(|s| (*s - 0.6).abs() < 1e-6));
    }
}
