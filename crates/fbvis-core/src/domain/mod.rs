pub mod errors;

pub use errors::{VisError, VisErrorCategory, VisResult};

use serde::Serialize;

/// One fitted parameter from the "Starting parameter indices" block.
/// Unique by `index` and by `identifier` within a run; created once,
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub index: usize,
    pub initial_value: f64,
    pub identifier: String,
}

/// Reference/experimental state point for one property, in order of
/// appearance in the log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperimentalPoint {
    pub temperature: f64,
    pub pressure: f64,
    pub reference_value: f64,
}

/// Simulated state point reported for one optimization iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulatedPoint {
    pub temperature: f64,
    pub pressure: f64,
    pub value: f64,
    pub uncertainty: f64,
}

/// All simulated points printed under a single marker occurrence. Batch
/// order equals marker occurrence order equals iteration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IterationBatch {
    pub points: Vec<SimulatedPoint>,
}

/// Parsed time series for one physical property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySeries {
    pub name: String,
    pub unit: String,
    pub experimental: Vec<ExperimentalPoint>,
    pub iterations: Vec<IterationBatch>,
}

/// Percent deviation of one parameter from its first observed value, in
/// strict iteration order. `deviations[0]` is 0.0 by construction whenever
/// the parameter appears in at least one step snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationSeries {
    pub identifier: String,
    pub initial_value: f64,
    pub deviations: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::{DeviationSeries, IterationBatch, SimulatedPoint};

    #[test]
    fn iteration_batches_serialize_in_point_order() {
        let batch = IterationBatch {
            points: vec![
                SimulatedPoint {
                    temperature: 280.0,
                    pressure: 1.0,
                    value: 999.2,
                    uncertainty: 0.4,
                },
                SimulatedPoint {
                    temperature: 300.0,
                    pressure: 1.0,
                    value: 996.1,
                    uncertainty: 0.3,
                },
            ],
        };
        let json = serde_json::to_value(&batch).expect("batch should serialize");
        let temps: Vec<f64> = json["points"]
            .as_array()
            .expect("points array")
            .iter()
            .map(|point| point["temperature"].as_f64().expect("temperature"))
            .collect();
        assert_eq!(temps, vec![280.0, 300.0]);
    }

    #[test]
    fn deviation_series_keeps_identifier_and_baseline() {
        let series = DeviationSeries {
            identifier: "VDWSSIG:OW".to_string(),
            initial_value: 3.15,
            deviations: vec![0.0, 1.2],
        };
        assert_eq!(series.deviations.len(), 2);
        assert_eq!(series.deviations[0], 0.0);
    }
}
