//! Love Emergency CLI
//!
//! Usage:
//!   love-emergency --intimacy 5,5,5 --passion 3,3,3 --commitment 1,1,1 --weeks 4
//!   love-emergency --input answers.json --json      # JSON in, JSON out
//!   love-emergency --mode random --seed 7 --verbose # Forced random simulation
//!   love-emergency --serve                          # HTTP API server

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use love_emergency::core::{
    parse_triple, run_server, ChartData, JsonlRecorder, NoopRecorder,
    ReportAssembler, ReportRecorder,
};
use love_emergency::types::{
    AssessmentInput, AssessmentRequest, Axis, BehaviorFlag, Report, RiskLevel, SimulationMode,
    StabilityVerdict, TargetPersonality,
};
use love_emergency::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "love-emergency",
    version = VERSION,
    about = "Love Emergency - relationship diagnosis and confession timing",
    long_about = "Love Emergency scores a short relationship questionnaire.\n\n\
                  It classifies the relationship with the triangular theory of love\n\
                  (intimacy, passion, commitment) and predicts when to confess,\n\
                  how likely it is to succeed, and how sensitive that is to timing.\n\n\
                  Sliders are three answers from 1 to 5 per axis, e.g. --intimacy 5,4,3.\n\
                  Behavior answers: 1 = steady, 2 = impulsive."
)]
struct Args {
    /// JSON file with a complete submission (overrides the answer flags)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Intimacy sliders: secrets shared, support relied on, unspoken understanding
    #[arg(long, default_value = "3,3,3")]
    intimacy: String,

    /// Passion sliders: heartbeat, urge to surprise, physical longing
    #[arg(long, default_value = "3,3,3")]
    passion: String,

    /// Commitment sliders: shared future, working through conflict, exclusivity
    #[arg(long, default_value = "3,3,3")]
    commitment: String,

    /// Q1 action tendency: 1 = play it safe (postpone), 2 = strike early
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    q1: u8,

    /// Q2 plan stability: 1 = stick to the plan, 2 = keep changing it
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    q2: u8,

    /// Weeks until the anchor event (0.1 - 20)
    #[arg(short, long, default_value_t = 4.0)]
    weeks: f64,

    /// Name of the anchor event
    #[arg(long, default_value = "Ordinary Friday")]
    event: String,

    /// Target personality: gentle-reserved, warm-outgoing, rational-logical, mysterious-aloof
    #[arg(short, long, default_value = "gentle-reserved")]
    target: String,

    /// Force a simulation mode: converging, diverging, random
    #[arg(long)]
    mode: Option<SimulationMode>,

    /// Seed for the random simulation mode
    #[arg(long)]
    seed: Option<u64>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, env = "LOVE_EMERGENCY_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,

    /// Append anonymized report rows to this JSON-lines file
    #[arg(long, env = "LOVE_EMERGENCY_RECORD_FILE")]
    record_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show model parameters and simulation diagnostics
    #[arg(long)]
    verbose: bool,

    /// Print the success curve as a table
    #[arg(long)]
    curve: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, env = "LOVE_EMERGENCY_LOG", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let recorder: Arc<dyn ReportRecorder> = match &args.record_file {
        Some(path) => {
            let recorder = JsonlRecorder::new(path);
            info!(path = %recorder.path().display(), "recording reports");
            Arc::new(recorder)
        }
        None => Arc::new(NoopRecorder),
    };

    let result = if args.serve {
        run_serve(&args, recorder).await
    } else {
        run_single(&args, recorder)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Build the submission from --input or the answer flags
fn build_input(args: &Args) -> Result<AssessmentInput, Box<dyn std::error::Error>> {
    if let Some(path) = &args.input {
        let json = std::fs::read_to_string(path)?;
        let request: AssessmentRequest = json.parse()?;
        let mut input = AssessmentInput::try_from(request)?;
        if args.mode.is_some() {
            input.mode_override = args.mode;
        }
        return Ok(input);
    }

    Ok(AssessmentInput {
        intimacy: parse_triple(Axis::Intimacy, &args.intimacy)?,
        passion: parse_triple(Axis::Passion, &args.passion)?,
        commitment: parse_triple(Axis::Commitment, &args.commitment)?,
        action_tendency: BehaviorFlag::try_from(args.q1)?,
        plan_stability: BehaviorFlag::try_from(args.q2)?,
        time_anchor_weeks: args.weeks,
        event_label: args.event.clone(),
        target: args.target.parse::<TargetPersonality>()?,
        mode_override: args.mode,
    })
}

/// Run one assessment and print it
fn run_single(args: &Args, recorder: Arc<dyn ReportRecorder>) -> Result<(), Box<dyn std::error::Error>> {
    let input = build_input(args)?;

    let assembler = match args.seed {
        Some(seed) => ReportAssembler::seeded(seed),
        None => ReportAssembler::from_entropy(),
    };
    let report = assembler.with_recorder(recorder).assemble(&input)?;

    if args.json {
        let chart = ChartData::from_inputs(&report.render_inputs());
        let brave = report.trajectory().is_brave();
        let body = serde_json::json!({
            "report": &report,
            "brave": brave,
            "chart": &chart,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_report(&report);
    if args.verbose {
        print_verbose(&report);
    }
    if args.curve {
        print_curve(&report);
    }
    Ok(())
}

/// Print header
fn print_header() {
    println!("{}", "╔══════════════════════════════════════════════════════════╗".bold());
    println!("{}", format!("║  💌 Love Emergency v{} - Diagnosis Report                ║", VERSION).bold());
    println!("{}", "╚══════════════════════════════════════════════════════════╝".bold());
    println!();
}

/// Print the human-readable report
fn print_report(report: &Report) {
    print_header();

    println!("  {:<22} {}", "Relationship type:", report.love_type().label().magenta().bold());
    println!("  {:<22} {}", "", report.love_type().description().dimmed());
    println!("  {:<22} {}", "Success rate:", report.success_percent().bold());
    println!("  {:<22} {:.2} weeks from now", "Ideal moment:", report.parameters().t_peak);
    println!("  {:<22} {:.2} weeks from now", "Recommended action:", report.t_now());
    println!("  {:<22} {}", "Event:", report.event_label());

    let verdict = format!("{} {}", report.stability().emoji(), report.stability().description());
    let verdict = match report.stability() {
        StabilityVerdict::Stable => verdict.green(),
        StabilityVerdict::Critical => verdict.yellow(),
    };
    println!();
    println!("  {}", verdict);

    println!();
    println!("  {} {}", "For".bold(), format!("{}:", report.target().label()).bold());
    let guidance = report.guidance();
    println!("    {}", guidance.personality_tip);
    let risk = match guidance.risk {
        RiskLevel::Low => format!("⚠ {}", guidance.risk_message).red(),
        RiskLevel::Ready => format!("✓ {}", guidance.risk_message).green(),
    };
    println!("    {}", risk);
    println!();
    println!("  {}", format!("report {}", report.fingerprint()).dimmed());
}

/// Print model parameters and simulation diagnostics
fn print_verbose(report: &Report) {
    let p = report.parameters();
    let scores = report.scores();
    let axes: Vec<String> = Axis::ALL
        .iter()
        .map(|axis| format!("{} = {:.2}", axis.symbol(), scores.get(*axis)))
        .collect();
    let trajectory = report.trajectory();

    println!();
    println!("┌──────────────────────────────────────┐");
    println!("│ {}", axes.join("  "));
    println!("├──────────────────────────────────────┤");
    println!("│ A      = {:.4}", p.amplitude);
    println!("│ sigma  = {:.4}", p.sigma);
    println!("│ alpha  = {:.4}", p.alpha);
    println!("│ t_peak = {:.4}", p.t_peak);
    println!("├──────────────────────────────────────┤");
    println!("│ Mode: {}", report.mode());
    let tail: Vec<String> = trajectory.tail(5).iter().map(|v| format!("{:.4}", v)).collect();
    println!("│ Tail: [{}]", tail.join(", "));
    println!("│ Brave: {}", if trajectory.is_brave() { "yes" } else { "no" });
    println!("│ t_now = {:.4}", report.t_now());
    println!("└──────────────────────────────────────┘");
}

/// Print the success curve as a coarse table with bars
fn print_curve(report: &Report) {
    let chart = ChartData::with_samples(&report.render_inputs(), 21);
    println!();
    println!("  {}", "Success curve".bold());
    for point in &chart.curve {
        let bar = "█".repeat((point.rate * 40.0).round() as usize);
        println!("  t={:>5.2}  {:>5.1}%  {}", point.t, point.rate * 100.0, bar.blue());
    }
    println!(
        "  {}",
        format!("▲ action at t={:.2}: {:.1}%", chart.marker.t, chart.marker.rate * 100.0).yellow()
    );
}

/// Run HTTP API server
async fn run_serve(args: &Args, recorder: Arc<dyn ReportRecorder>) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║  💌 Love Emergency API Server                             ║");
    println!("║  Version: {}                                           ║", VERSION);
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    run_server(&args.addr, recorder).await
}
