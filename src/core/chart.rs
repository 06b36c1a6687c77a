//! Render-ready chart data for the rendering collaborator
//!
//! - Radar: I, P, C over [0, 10], titled with the love type
//! - Curve: success rate over [0, max(10, t_peak + 4)], marker at t_now

use serde::{Deserialize, Serialize};
use crate::SCORE_MAX;
use crate::core::GaussianSuccessModel;
use crate::types::{Axis, RenderInputs};

/// Default number of curve samples
pub const CURVE_SAMPLES: usize = 200;

/// Minimum right edge of the curve (weeks)
pub const CURVE_MIN_SPAN: f64 = 10.0;

/// How far past the peak the curve extends (weeks)
pub const CURVE_PEAK_MARGIN: f64 = 4.0;

/// One spoke of the radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSpoke {
    pub axis: Axis,
    pub value: f64,
}

/// A point on the success curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Weeks from now
    pub t: f64,
    pub rate: f64,
}

/// Everything needed to draw both charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub radar_title: String,
    pub radar: Vec<RadarSpoke>,
    /// Radial axis upper bound
    pub radar_max: f64,
    pub curve: Vec<CurvePoint>,
    /// Predicted action time on the curve
    pub marker: CurvePoint,
}

impl ChartData {
    /// Chart data with the standard 200 curve samples
    pub fn from_inputs(inputs: &RenderInputs) -> Self {
        Self::with_samples(inputs, CURVE_SAMPLES)
    }

    /// Chart data with `samples` evenly spaced curve points (ends included)
    pub fn with_samples(inputs: &RenderInputs, samples: usize) -> Self {
        let model = GaussianSuccessModel::from_parts(inputs.amplitude, inputs.t_peak, inputs.sigma);
        let end = curve_end(inputs.t_peak);

        let curve = linspace(0.0, end, samples)
            .into_iter()
            .map(|t| CurvePoint { t, rate: model.success_rate(t) })
            .collect();

        let radar = vec![
            RadarSpoke { axis: Axis::Intimacy, value: inputs.intimacy },
            RadarSpoke { axis: Axis::Passion, value: inputs.passion },
            RadarSpoke { axis: Axis::Commitment, value: inputs.commitment },
        ];

        Self {
            radar_title: format!("Relationship diagnosis: {}", inputs.love_title),
            radar,
            radar_max: SCORE_MAX,
            curve,
            marker: CurvePoint { t: inputs.t_now, rate: model.success_rate(inputs.t_now) },
        }
    }
}

/// Right edge of the time axis
pub fn curve_end(t_peak: f64) -> f64 {
    CURVE_MIN_SPAN.max(t_peak + CURVE_PEAK_MARGIN)
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { end } else { start + step * k as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(t_peak: f64) -> RenderInputs {
        RenderInputs {
            intimacy: 10.0,
            passion: 5.5,
            commitment: 1.0,
            amplitude: 0.7475,
            t_peak,
            sigma: 0.65,
            t_now: t_peak + 0.0143,
            love_title: "Liking".to_string(),
        }
    }

    #[test]
    fn test_curve_span_and_size() {
        let chart = ChartData::from_inputs(&inputs(3.12));
        assert_eq!(chart.curve.len(), 200);
        assert_eq!(chart.curve[0].t, 0.0);
        assert_eq!(chart.curve[199].t, 10.0);
    }

    #[test]
    fn test_curve_extends_past_late_peak() {
        let chart = ChartData::with_samples(&inputs(8.0), 5);
        assert_eq!(chart.curve.last().map(|p| p.t), Some(12.0));
    }

    #[test]
    fn test_marker_and_radar() {
        let chart = ChartData::from_inputs(&inputs(3.12));
        assert!((chart.marker.rate - 0.7473).abs() < 1e-3);
        assert_eq!(chart.radar_title, "Relationship diagnosis: Liking");
        assert_eq!(chart.radar.len(), 3);
        assert_eq!(chart.radar[1].axis, Axis::Passion);
        assert_eq!(chart.radar_max, 10.0);
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }
}
