use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Summary of a two-sample timing comparison.
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub cohens_d: f64,
    pub is_constant_time: bool,
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call, one entry per sample.
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let iterations = self.num_iterations.max(1);
        (0..self.num_samples)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..iterations {
                    f();
                }
                start.elapsed().as_nanos() / iterations as u128
            })
            .collect()
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        if times.len() < 2 {
            return 0.0;
        }
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    // IQR filter
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .copied()
            .filter(|&t| (t as f64) >= lo && (t as f64) <= hi)
            .collect()
    }

    // Welch's t-test
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let se = (Self::variance(times_a, mean_a) / times_a.len() as f64
            + Self::variance(times_b, mean_b) / times_b.len() as f64)
            .sqrt();
        if se == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / se
    }

    // Welch-Satterthwaite
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let term_a = Self::variance(times_a, Self::mean(times_a)) / n_a;
        let term_b = Self::variance(times_b, Self::mean(times_b)) / n_b;

        (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0))
    }

    /// Two-tailed p-value from the t distribution; 1.0 when undefined.
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return 1.0;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let pooled = ((Self::variance(times_a, mean_a) * (n_a - 1.0)
            + Self::variance(times_b, mean_b) * (n_b - 1.0))
            / (n_a + n_b - 2.0))
            .sqrt();
        if pooled == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / pooled
    }

    /// Weighted blend of mean ratio, t-statistic and spread. Never below the
    /// mean ratio's floor of 1.
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("After outlier removal, not enough data points remain".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();
        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let rel_std_dev = f64::max(std_dev_a / mean_a, std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            combined_score,
            cohens_d: Self::cohens_d(&clean_a, &clean_b),
            is_constant_time: combined_score <= config.combined_score_threshold
                && mean_ratio <= config.mean_ratio_max,
        })
    }
}

/// Short human-readable verdict for a failing or passing comparison.
pub fn generate_test_insights(analysis: &TimingAnalysis, config: &TestConfig, name: &str) -> String {
    if analysis.is_constant_time {
        return format!("PASS: {} shows no timing dependence.\n", name);
    }

    let mut insights = format!("FAIL: {} timing dependence detected.\n", name);
    insights.push_str(&format!(
        "  Mean: {:.0} ns vs {:.0} ns (ratio {:.3}, limit {:.3})\n",
        analysis.mean_a, analysis.mean_b, analysis.mean_ratio, config.mean_ratio_max
    ));
    insights.push_str(&format!(
        "  Stats: t={:.2} (threshold {:.2}), p={:.2e}, d={:.2}, score={:.3}\n",
        analysis.t_statistic,
        config.t_stat_threshold,
        analysis.p_value,
        analysis.cohens_d,
        analysis.combined_score
    ));
    if analysis.mean_ratio > 1.5 && analysis.p_value < 0.001 {
        insights.push_str("  Likely an early return or a branch on the comparison result\n");
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_samples_score_as_constant_time() {
        let times = vec![100u128, 101, 99, 100, 102, 98, 100, 101];
        let tester = TimingTester::new(times.len(), 1);
        let analysis = tester
            .analyze_constant_time(&times, &times, &TestConfig::default())
            .unwrap();
        assert_eq!(analysis.t_statistic, 0.0);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn doubled_samples_are_flagged() {
        let a = vec![100u128, 101, 99, 100, 102, 98, 100, 101];
        let b: Vec<u128> = a.iter().map(|t| t * 2).collect();
        let tester = TimingTester::new(a.len(), 1);
        let analysis = tester
            .analyze_constant_time(&a, &b, &TestConfig::default())
            .unwrap();
        assert!(analysis.mean_ratio > 1.9);
        assert!(!analysis.is_constant_time);
        assert!(generate_test_insights(&analysis, &TestConfig::default(), "x").starts_with("FAIL"));
    }

    #[test]
    fn outliers_are_dropped() {
        let times = vec![10u128, 11, 10, 12, 11, 10, 1000];
        assert!(!TimingTester::remove_outliers(&times).contains(&1000));
    }
}
