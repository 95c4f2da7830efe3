//! Injectable randomness
//!
//! Every generator takes a `&mut impl RandomSource` instead of reaching for a
//! global generator, so callers decide between OS entropy, a seeded
//! [`rand::rngs::StdRng`], or a [`Scripted`] sequence in tests.

/// A source of uniform floats in `[0, 1)`
///
/// Any [`rand::RngCore`] implements this trait.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// `true` with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform value in `[-1, 1)`
    fn signed_unit(&mut self) -> f64 {
        self.next_f64().mul_add(2.0, -1.0)
    }

    /// Uniform index in `0..len`; returns 0 when `len` is 0
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "product is non-negative and bounded by len"
    )]
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.next_f64() * len as f64).floor() as usize;
        scaled.min(len - 1)
    }

    /// Fisher-Yates shuffle in place
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        rand::Rng::random::<f64>(self)
    }
}

/// A deterministic source that cycles through a fixed list of values
///
/// Values are clamped into `[0, 1)`. An empty list behaves like `[0.0]`.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    values: Vec<f64>,
    cursor: usize,
}

impl Scripted {
    /// Create a source that replays `values` forever
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            cursor: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
