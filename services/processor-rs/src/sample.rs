use rand::Rng;
use serde::Serialize;

pub const STATUS_ACTIVE: &str = "Active";

/// Inclusive lower bound of a sampled value.
pub const VALUE_MIN: u32 = 1;
/// Exclusive upper bound of a sampled value.
pub const VALUE_MAX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    pub timestamp: String,
    pub value: u32,
    pub status: &'static str,
}

impl SampleRecord {
    /// Draws `value` uniformly from `[VALUE_MIN, VALUE_MAX)`.
    pub fn generate<R: Rng + ?Sized>(timestamp: String, rng: &mut R) -> Self {
        Self {
            timestamp,
            value: rng.gen_range(VALUE_MIN..VALUE_MAX),
            status: STATUS_ACTIVE,
        }
    }
}

/// Rows produced in one cycle.
#[derive(Debug, Clone, Default)]
pub struct SampleFrame {
    rows: Vec<SampleRecord>,
}

impl SampleFrame {
    pub fn new(rows: Vec<SampleRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean of the `value` column, `None` for an empty frame.
    pub fn mean_value(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = self.rows.iter().map(|r| f64::from(r.value)).sum();
        Some(sum / self.len() as f64)
    }
}

impl From<SampleRecord> for SampleFrame {
    fn from(record: SampleRecord) -> Self {
        Self::new(vec![record])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn record(value: u32) -> SampleRecord {
        SampleRecord {
            timestamp: "2024-01-01 00:00:00".to_string(),
            value,
            status: STATUS_ACTIVE,
        }
    }

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..10_000 {
            let r = SampleRecord::generate(String::new(), &mut rng);
            assert!((1..=99).contains(&r.value), "value {} out of range", r.value);
            assert_eq!(r.status, "Active");
        }
    }

    #[test]
    fn both_ends_of_the_range_are_reachable() {
        let mut rng = StdRng::seed_from_u64(9);
        let values: Vec<u32> = (0..20_000)
            .map(|_| SampleRecord::generate(String::new(), &mut rng).value)
            .collect();
        assert!(values.contains(&1));
        assert!(values.contains(&99));
        assert!(!values.contains(&100));
    }

    #[test]
    fn single_row_mean_is_the_value() {
        let frame = SampleFrame::from(record(42));
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.mean_value(), Some(42.0));
    }

    #[test]
    fn multi_row_mean() {
        let frame = SampleFrame::new(vec![record(1), record(2), record(4)]);
        let mean = frame.mean_value().unwrap();
        assert!((mean - 7.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_frame_has_no_mean() {
        let frame = SampleFrame::default();
        assert!(frame.is_empty());
        assert_eq!(frame.mean_value(), None);
    }

    #[test]
    fn record_serializes_like_a_row() {
        let json = serde_json::to_string(&record(7)).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2024-01-01 00:00:00","value":7,"status":"Active"}"#
        );
    }
}
