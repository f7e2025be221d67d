use ndarray::{Array1, ArrayView1};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::error::{RegressionErr, Result};

/// Returns `n` evenly spaced values over `[start, end]`, both ends included.
///
/// The last element is exactly `end`, a single element yields `[start]` and `n = 0`
/// yields an empty array.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            Array1::from_shape_fn(n, |i| {
                if i == n - 1 {
                    end
                } else {
                    start + step * i as f64
                }
            })
        }
    }
}

/// An immutable sample of `(x, y)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The predictor values.
    /// * `y` - The observed values, one per predictor value.
    ///
    /// # Returns
    /// An error if both sequences differ in length.
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(RegressionErr::ShapeMismatch {
                what: "dataset y",
                got: y.len(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the `(x, y)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// The full description of a synthetic sample drawn around the line `true_a + true_b * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSpec {
    pub seed: u64,
    pub x_start: f64,
    pub x_end: f64,
    pub n: usize,
    pub true_a: f64,
    pub true_b: f64,
    pub noise_sigma: f64,
}

impl DatasetSpec {
    /// The sample the line is fitted against.
    pub const TRAIN: Self = Self {
        seed: 42,
        x_start: -8.,
        x_end: 8.,
        n: 30,
        true_a: 1.,
        true_b: 1.,
        noise_sigma: 1.,
    };

    /// The held out sample, noisier than the train one.
    pub const TEST: Self = Self {
        seed: 24,
        x_start: -8.,
        x_end: 8.,
        n: 30,
        true_a: 1.,
        true_b: 1.,
        noise_sigma: 2.,
    };

    /// Generates the dataset described by these settings.
    pub fn generate(&self) -> Result<Dataset> {
        generate(
            self.seed,
            self.x_start,
            self.x_end,
            self.n,
            self.true_a,
            self.true_b,
            self.noise_sigma,
        )
    }
}

/// Generates a synthetic dataset.
///
/// The `x` values are `n` evenly spaced points over `[x_start, x_end]` and every
/// `y[i] = true_a + true_b * x[i] + noise[i]`, where the noise is drawn from
/// `N(0, noise_sigma)` with an rng seeded from `seed`. The same arguments always
/// yield the same dataset.
///
/// # Arguments
/// * `seed` - The seed of the noise generator.
/// * `x_start` - The first predictor value.
/// * `x_end` - The last predictor value.
/// * `n` - The amount of samples.
/// * `true_a` - The intercept of the underlying line.
/// * `true_b` - The slope of the underlying line.
/// * `noise_sigma` - The standard deviation of the gaussian noise.
///
/// # Returns
/// An error if `n` is zero, the range is not finite or the noise level is invalid.
pub fn generate(
    seed: u64,
    x_start: f64,
    x_end: f64,
    n: usize,
    true_a: f64,
    true_b: f64,
    noise_sigma: f64,
) -> Result<Dataset> {
    if n == 0 {
        return Err(RegressionErr::EmptyInput { what: "dataset" });
    }

    if !x_start.is_finite() || !x_end.is_finite() {
        return Err(RegressionErr::InvalidRange {
            start: x_start,
            end: x_end,
        });
    }

    if !noise_sigma.is_finite() || noise_sigma < 0. {
        return Err(RegressionErr::InvalidNoise(noise_sigma));
    }

    let normal =
        Normal::new(0., noise_sigma).map_err(|_| RegressionErr::InvalidNoise(noise_sigma))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let x = linspace(x_start, x_end, n);
    let noise: Array1<f64> = normal.sample_iter(&mut rng).take(n).collect();
    let y = x.mapv(|x| true_a + true_b * x) + noise;

    log::debug!(seed = seed, n = n, sigma = noise_sigma; "generated dataset");
    Dataset::new(x, y)
}

/// The two fixed samples the explorer works with.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub train: Dataset,
    pub test: Dataset,
}

/// Generates the train and test datasets from their fixed specs.
pub fn generate_datasets() -> Result<Datasets> {
    Ok(Datasets {
        train: DatasetSpec::TRAIN.generate()?,
        test: DatasetSpec::TEST.generate()?,
    })
}
