/// Summary statistics of one sample axis. Standard deviation is the
/// population form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl AxisStats {
    /// NaN samples are skipped. An empty input yields all zeros.
    pub fn compute<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        // Welford
        let mut count = 0usize;
        let mut mean = 0.0f64;
        let mut m2 = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for v in values.into_iter().filter(|v| !v.is_nan()) {
            let v = f64::from(v);
            count += 1;
            let delta = v - mean;
            mean += delta / count as f64;
            m2 += delta * (v - mean);
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return Self { min: 0.0, max: 0.0, mean: 0.0, std: 0.0 };
        }

        Self {
            min,
            max,
            mean,
            std: (m2 / count as f64).sqrt(),
        }
    }
}
