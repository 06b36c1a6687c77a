//! Core modules for Love Emergency

pub mod normalizer;
pub mod params;
pub mod simulator;
pub mod success;
pub mod classifier;
pub mod guidance;
pub mod chart;
pub mod recorder;
pub mod input_parser;
pub mod assembler;
pub mod api;

pub use normalizer::ScoreNormalizer;
pub use params::ModelParameterDeriver;
pub use simulator::{BehaviorModeSelector, ConfessionTimeSimulator, UniformSource};
pub use success::{GaussianSuccessModel, RecommendedTimeEstimator, StabilityAnalyzer};
pub use classifier::LoveTypeClassifier;
pub use guidance::Advisor;
pub use chart::{ChartData, CurvePoint, RadarSpoke, CURVE_SAMPLES};
pub use recorder::{ReportRecorder, NoopRecorder, JsonlRecorder, load_rows};
pub use input_parser::parse_triple;
pub use assembler::ReportAssembler;
pub use api::{create_router, run_server};
