//! Degree distribution statistics.

/// Which arcs count toward a vertex's degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreeDirection {
    /// Arcs leaving the vertex (functions it calls)
    #[default]
    Out,
    /// Arcs entering the vertex (functions calling it)
    In,
}

/// Summary of a degree distribution
///
/// **Public** - returned from `Digraph::degree_stats`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeStats {
    /// Mean degree (`A / V`)
    pub mean: f64,

    /// Population standard deviation, 0 when `V <= 1`
    pub std_dev: f64,

    /// Largest single-vertex degree
    pub max: usize,

    /// Vertices with degree 0
    pub zero_degree: usize,
}

impl DegreeStats {
    /// Compute statistics from per-vertex degrees
    pub fn from_degrees(degrees: &[usize]) -> Self {
        if degrees.is_empty() {
            return Self::default();
        }

        let n = degrees.len() as f64;
        let total: usize = degrees.iter().sum();
        let mean = total as f64 / n;

        let std_dev = if degrees.len() <= 1 {
            0.0
        } else {
            let variance = degrees
                .iter()
                .map(|&d| {
                    let diff = d as f64 - mean;
                    diff * diff
                })
                .sum::<f64>()
                / n;
            variance.sqrt()
        };

        Self {
            mean,
            std_dev,
            max: degrees.iter().copied().max().unwrap_or(0),
            zero_degree: degrees.iter().filter(|&&d| d == 0).count(),
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Mean: {:.3} | Std dev: {:.3} | Max: {} | Zero-degree: {}",
            self.mean, self.std_dev, self.max, self.zero_degree
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees() {
        let stats = DegreeStats::from_degrees(&[2, 1, 0, 1]);
        assert_eq!(stats.mean, 1.0);
        assert!((stats.std_dev - 0.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.max, 2);
        assert_eq!(stats.zero_degree, 1);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(DegreeStats::from_degrees(&[]), DegreeStats::default());

        let single = DegreeStats::from_degrees(&[3]);
        assert_eq!(single.mean, 3.0);
        assert_eq!(single.std_dev, 0.0);
    }

    #[test]
    fn test_summary_format() {
        let stats = DegreeStats::from_degrees(&[1, 1]);
        assert_eq!(stats.summary(), "Mean: 1.000 | Std dev: 0.000 | Max: 1 | Zero-degree: 0");
    }
}
