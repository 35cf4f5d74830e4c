//! # Flexure CLI
//!
//! Terminal front end for the rectangular section analyzer. Collects
//! numbers from flags, a JSON file or interactive prompts, runs the
//! calculation and prints a report.
//!
//! ```text
//! flexure design --b 250 --h 500 --a-s 62.5 --a-s-prime 40 --moment 325 --concrete C30 --rebar HRB400
//! flexure check  --b 250 --h 500 --a-s 62.5 --a-s-prime 40 --as 2600 --as-prime 800 --f-c 14.3 --f-y 360
//! flexure run beam.json --json
//! flexure interactive
//! ```
//!
//! Set `RUST_LOG=flexure_core=debug` to trace branch decisions.

mod report;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use flexure_core::calculations::section::{DEFAULT_ALPHA1, DEFAULT_XI_B};
use flexure_core::{
    CalcError,
    CalcResult,
    CalculationItem,
    CheckInput,
    ConcreteGrade,
    DesignInput,
    MaterialPair,
    RebarGrade,
    SectionProperties,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flexure")]
#[command(about = "Flexural design and capacity check of rectangular RC sections", version)]
struct Cli {
    /// Print the result as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Required reinforcement for a design moment
    Design {
        #[command(flatten)]
        section: SectionArgs,

        /// Design moment M (kN·m)
        #[arg(long)]
        moment: f64,
    },
    /// Moment capacity of known reinforcement
    Check {
        #[command(flatten)]
        section: SectionArgs,

        /// Tension steel area As (mm²)
        #[arg(long = "as")]
        as_mm2: f64,

        /// Compression steel area As' (mm²)
        #[arg(long = "as-prime", default_value_t = 0.0)]
        as_prime_mm2: f64,
    },
    /// Run a calculation described by a JSON file
    Run {
        /// Path to a JSON calculation item
        path: PathBuf,
    },
    /// Prompt for each value
    Interactive,
}

#[derive(Args, Debug, Clone)]
struct SectionArgs {
    /// Label for the report
    #[arg(long, default_value = "")]
    label: String,

    /// Section width b (mm)
    #[arg(long)]
    b: f64,

    /// Overall height h (mm)
    #[arg(long)]
    h: f64,

    /// Tension face to tension steel centroid a_s (mm)
    #[arg(long = "a-s")]
    a_s: f64,

    /// Compression face to compression steel centroid a_s' (mm)
    #[arg(long = "a-s-prime")]
    a_s_prime: f64,

    /// Concrete design strength fc (MPa); overrides --concrete
    #[arg(long = "f-c")]
    f_c: Option<f64>,

    /// Tension steel design strength fy (MPa); overrides --rebar
    #[arg(long = "f-y")]
    f_y: Option<f64>,

    /// Compression steel design strength fy' (MPa); defaults to fy
    #[arg(long = "f-y-prime")]
    f_y_prime: Option<f64>,

    /// Stress-block factor α1
    #[arg(long)]
    alpha1: Option<f64>,

    /// Limiting compression-depth ratio ξb
    #[arg(long = "xi-b")]
    xi_b: Option<f64>,

    /// Concrete grade (C20 ~ C60)
    #[arg(long)]
    concrete: Option<String>,

    /// Rebar grade (HPB300, HRB335, HRB400, HRB500)
    #[arg(long)]
    rebar: Option<String>,
}

impl SectionArgs {
    /// Resolve flags and grades into section properties.
    ///
    /// Explicit strengths win over grades; ξb comes from the grades only
    /// when both are given.
    fn to_properties(&self) -> CalcResult<SectionProperties> {
        let concrete = self
            .concrete
            .as_deref()
            .map(ConcreteGrade::from_str_flexible)
            .transpose()?;
        let rebar = self
            .rebar
            .as_deref()
            .map(RebarGrade::from_str_flexible)
            .transpose()?;

        let f_c = self
            .f_c
            .or(concrete.map(|c| c.f_c_mpa()))
            .ok_or_else(|| CalcError::missing_field("f_c (or --concrete)"))?;
        let f_y = self
            .f_y
            .or(rebar.map(|r| r.f_y_mpa()))
            .ok_or_else(|| CalcError::missing_field("f_y (or --rebar)"))?;
        let f_y_prime = self
            .f_y_prime
            .or(rebar.map(|r| r.f_y_prime_mpa()))
            .unwrap_or(f_y);
        let alpha1 = self
            .alpha1
            .or(concrete.map(|c| c.alpha1()))
            .unwrap_or(DEFAULT_ALPHA1);
        let grade_xi_b = concrete
            .zip(rebar)
            .map(|(c, r)| MaterialPair::new(c, r).xi_b());
        let xi_b = self.xi_b.or(grade_xi_b).unwrap_or(DEFAULT_XI_B);

        Ok(
            SectionProperties::new(self.b, self.h, self.a_s, self.a_s_prime, f_c, f_y, f_y_prime)
                .with_alpha1(alpha1)
                .with_xi_b(xi_b),
        )
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = build_item(&cli.command).and_then(|item| {
        tracing::info!(label = item.label(), calculation = item.calc_type(), "running calculation");
        item.run().map(|result| (item, result))
    });

    match outcome {
        Ok((item, result)) => {
            if cli.json {
                let doc = report::ReportJson {
                    label: item.label(),
                    calculation: item.calc_type(),
                    result: &result,
                };
                match serde_json::to_string_pretty(&doc) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", report::render(item.label(), item.calc_type(), &result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}

fn build_item(command: &Commands) -> CalcResult<CalculationItem> {
    match command {
        Commands::Design { section, moment } => Ok(CalculationItem::Design(DesignInput::new(
            section.label.clone(),
            section.to_properties()?,
            *moment,
        ))),
        Commands::Check {
            section,
            as_mm2,
            as_prime_mm2,
        } => Ok(CalculationItem::Check(CheckInput::new(
            section.label.clone(),
            section.to_properties()?,
            *as_mm2,
            *as_prime_mm2,
        ))),
        Commands::Run { path } => load_item(path),
        Commands::Interactive => Ok(prompt_item()),
    }
}

fn load_item(path: &Path) -> CalcResult<CalculationItem> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    CalculationItem::from_json(&contents)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{prompt} [{default}]: ");
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_item() -> CalculationItem {
    println!("Flexure - Rectangular RC Section Analyzer");
    println!("=========================================");
    println!("Press Enter to accept the value in brackets.");
    println!();

    let check_mode = prompt_f64("Mode (1 = design, 2 = check)", 1.0) == 2.0;

    let section = SectionProperties::new(
        prompt_f64("Width b (mm)", 250.0),
        prompt_f64("Height h (mm)", 500.0),
        prompt_f64("a_s (mm)", 62.5),
        prompt_f64("a_s' (mm)", 40.0),
        prompt_f64("fc (MPa)", 14.3),
        prompt_f64("fy (MPa)", 360.0),
        prompt_f64("fy' (MPa)", 360.0),
    )
    .with_alpha1(prompt_f64("α1", DEFAULT_ALPHA1))
    .with_xi_b(prompt_f64("ξb", DEFAULT_XI_B));

    let item = if check_mode {
        CalculationItem::Check(CheckInput::new(
            "Interactive",
            section,
            prompt_f64("As (mm²)", 2600.0),
            prompt_f64("As' (mm²)", 800.0),
        ))
    } else {
        CalculationItem::Design(DesignInput::new("Interactive", section, prompt_f64("M (kN·m)", 200.0)))
    };
    println!();
    item
}
