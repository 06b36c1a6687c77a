//! Report assembler: runs the whole model for one submission
//!
//! normalize → derive parameters → select mode → simulate → estimate t_now →
//! success rate → stability; classify love type; advise; record (best effort)

use std::sync::Arc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use crate::core::{
    Advisor, BehaviorModeSelector, ConfessionTimeSimulator, GaussianSuccessModel,
    LoveTypeClassifier, ModelParameterDeriver, NoopRecorder, RecommendedTimeEstimator,
    ReportRecorder, ScoreNormalizer, StabilityAnalyzer, UniformSource,
};
use crate::types::{AssessmentError, AssessmentInput, Report};

/// Orchestrates every model component into one immutable report
pub struct ReportAssembler<S: UniformSource = StdRng> {
    normalizer: ScoreNormalizer,
    deriver: ModelParameterDeriver,
    selector: BehaviorModeSelector,
    simulator: ConfessionTimeSimulator,
    estimator: RecommendedTimeEstimator,
    analyzer: StabilityAnalyzer,
    classifier: LoveTypeClassifier,
    advisor: Advisor,
    source: S,
    recorder: Arc<dyn ReportRecorder>,
}

impl ReportAssembler<StdRng> {
    /// Assembler drawing random-mode values from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Assembler with a reproducible random mode
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<S: UniformSource> ReportAssembler<S> {
    /// Create assembler with an explicit uniform source and no recorder
    pub fn new(source: S) -> Self {
        Self {
            normalizer: ScoreNormalizer::new(),
            deriver: ModelParameterDeriver::new(),
            selector: BehaviorModeSelector::new(),
            simulator: ConfessionTimeSimulator::new(),
            estimator: RecommendedTimeEstimator::new(),
            analyzer: StabilityAnalyzer::new(),
            classifier: LoveTypeClassifier::new(),
            advisor: Advisor::new(),
            source,
            recorder: Arc::new(NoopRecorder),
        }
    }

    /// Forward finished reports to `recorder`
    pub fn with_recorder(mut self, recorder: Arc<dyn ReportRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Compute the report without recording it
    pub fn evaluate(&mut self, input: &AssessmentInput) -> Result<Report, AssessmentError> {
        input.validate()?;

        let scores = self.normalizer.normalize(input)?;
        let parameters = self.deriver.derive(&scores, input.time_anchor_weeks)?;
        debug!(
            i = scores.intimacy, p = scores.passion, c = scores.commitment,
            amplitude = parameters.amplitude, sigma = parameters.sigma, t_peak = parameters.t_peak,
            "derived model parameters"
        );

        let mode = self.selector.select(input.action_tendency, input.plan_stability, input.mode_override);
        let trajectory = self.simulator.simulate(mode, &mut self.source);
        let t_now = self.estimator.estimate(&parameters, &trajectory);

        let model = GaussianSuccessModel::new(&parameters);
        let success_rate = model.success_rate(t_now);
        let stability = self.analyzer.analyze(&model, t_now);

        let love_type = self.classifier.classify_scores(&scores);
        let guidance = self.advisor.advise(input.target, success_rate);

        let mut report = Report {
            fingerprint: String::new(),
            timestamp: chrono::Utc::now(),
            target: input.target,
            event_label: input.event_label.clone(),
            scores,
            parameters,
            trajectory,
            t_now,
            success_rate,
            stability,
            love_type,
            guidance,
        };
        report.fingerprint = fingerprint(&report);

        info!(
            fingerprint = %report.fingerprint,
            love_type = %report.love_type,
            %mode,
            t_now = report.t_now,
            success = %report.success_percent(),
            stability = %report.stability,
            "assessment complete"
        );
        Ok(report)
    }

    /// Compute the report and hand it to the recorder once.
    ///
    /// Recording failures are discarded; the report is returned regardless.
    pub fn assemble(&mut self, input: &AssessmentInput) -> Result<Report, AssessmentError> {
        let report = self.evaluate(input)?;
        if let Err(err) = self.recorder.record(&report) {
            debug!(code = err.code(), error = %err, "report not recorded");
        }
        Ok(report)
    }
}

/// Content fingerprint: `rpt_` + first 4 bytes of SHA-256 over everything but the timestamp
fn fingerprint(report: &Report) -> String {
    let record = report.log_record();
    let canonical = format!(
        "{:.6}|{:.6}|{:.6}|{}|{}|{}|{:.6}|{}|{}",
        report.scores.intimacy,
        report.scores.passion,
        report.scores.commitment,
        record.love_type,
        record.success_rate,
        record.target,
        report.t_now,
        report.mode(),
        report.event_label,
    );

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let hash = hasher.finalize();
    format!("rpt_{:08x}", u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::types::{
        BehaviorFlag, LoveType, RecordError, SimulationMode, StabilityVerdict, TargetPersonality,
    };

    fn reference_input() -> AssessmentInput {
        AssessmentInput {
            intimacy: [5, 5, 5],
            passion: [3, 3, 3],
            commitment: [1, 1, 1],
            action_tendency: BehaviorFlag::Steady,
            plan_stability: BehaviorFlag::Steady,
            time_anchor_weeks: 4.0,
            event_label: "Ordinary Friday".to_string(),
            target: TargetPersonality::GentleReserved,
            mode_override: None,
        }
    }

    /// Recorder that always fails and counts attempts
    #[derive(Default)]
    struct BrokenRecorder {
        calls: AtomicUsize,
    }

    impl ReportRecorder for BrokenRecorder {
        fn record(&self, _report: &Report) -> Result<(), RecordError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no credentials").into())
        }
    }

    #[test]
    fn test_reference_scenario() {
        let report = ReportAssembler::seeded(1).assemble(&reference_input()).unwrap();

        assert_eq!(report.scores.intimacy, 10.0);
        assert_eq!(report.scores.passion, 5.5);
        assert_eq!(report.scores.commitment, 1.0);
        assert!((report.parameters.amplitude - 0.7475).abs() < 1e-9);
        assert!((report.parameters.sigma - 0.65).abs() < 1e-9);
        assert!((report.parameters.alpha - 0.78).abs() < 1e-9);
        assert!((report.parameters.t_peak - 3.12).abs() < 1e-9);
        assert_eq!(report.mode(), SimulationMode::Converging);
        assert!(report.t_now > report.parameters.t_peak);
        assert!((report.t_now - 3.13).abs() < 0.01);
        assert!((report.success_rate - 0.747).abs() < 0.001);
        assert_eq!(report.success_percent(), "74.7%");
        assert_eq!(report.stability, StabilityVerdict::Stable);
        assert_eq!(report.love_type, LoveType::Liking);
        assert!(report.trajectory.is_brave());
    }

    #[test]
    fn test_fingerprint_format() {
        let report = ReportAssembler::seeded(1).evaluate(&reference_input()).unwrap();
        assert!(report.fingerprint.starts_with("rpt_"));
        assert_eq!(report.fingerprint.len(), 12);
    }

    #[test]
    fn test_recorder_failure_is_swallowed_and_called_once() {
        let recorder = Arc::new(BrokenRecorder::default());
        let mut assembler = ReportAssembler::seeded(1).with_recorder(recorder.clone());

        let report = assembler.assemble(&reference_input()).unwrap();

        assert_eq!(recorder.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.love_type, LoveType::Liking);
    }

    #[test]
    fn test_evaluate_does_not_record() {
        let recorder = Arc::new(BrokenRecorder::default());
        let mut assembler = ReportAssembler::seeded(1).with_recorder(recorder.clone());
        assembler.evaluate(&reference_input()).unwrap();
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let mut input = reference_input();
        input.passion = [3, 0, 3];
        let err = ReportAssembler::seeded(1).assemble(&input).unwrap_err();
        assert_eq!(err.code(), "R101_SLIDER_OUT_OF_RANGE");
    }

    #[test]
    fn test_validation_runs_before_any_stage() {
        let mut input = reference_input();
        input.intimacy = [0, 3, 3];
        input.time_anchor_weeks = 30.0;

        let err = ReportAssembler::seeded(1).evaluate(&input).unwrap_err();
        assert_eq!(err.code(), "R101_SLIDER_OUT_OF_RANGE");
    }

    #[test]
    fn test_random_override_is_seed_reproducible() {
        let mut input = reference_input();
        input.mode_override = Some(SimulationMode::Random);

        let a = ReportAssembler::seeded(99).evaluate(&input).unwrap();
        let b = ReportAssembler::seeded(99).evaluate(&input).unwrap();

        assert_eq!(a.mode(), SimulationMode::Random);
        assert_eq!(a.trajectory, b.trajectory);
        assert_eq!(a.t_now, b.t_now);
    }
}
