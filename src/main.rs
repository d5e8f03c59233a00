use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use quadrature::math::integration::integrationcalculator::IntegrationCalculator;
use quadrature::math::integration::intervalpartition::IntervalPartitionError;
use quadrature::math::integration::quadratureengine::QuadratureEngine;
use quadrature::math::integration::quadraturerule::QuadratureRule;
use quadrature::samplefunction::{
    SampleFunction,
    SelectionError
};

/// Numerical integration with Simpson's composite rule.
///
/// Any of the interval bounds, the sub-interval count or the function choice
/// left off the command line is prompted for on stdin.
#[derive(Parser, Debug)]
#[command(name = "quadrature")]
#[command(about = "Integrate a sample function over [a, b] with Simpson's rule")]
struct Args {
    /// Lower limit of integration (a)
    #[arg(short, long, allow_negative_numbers = true)]
    lower: Option<f64>,

    /// Upper limit of integration (b)
    #[arg(short, long, allow_negative_numbers = true)]
    upper: Option<f64>,

    /// Number of sub-intervals (positive and even)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    intervals: Option<i64>,

    /// Function to integrate: 1 = x^3 * e^(-x) / (x + 1), 2 = 1/x
    #[arg(short, long)]
    function: Option<SampleFunction>,

    /// Quadrature rule
    #[arg(short, long, default_value_t = QuadratureRule::Simpson)]
    rule: QuadratureRule,

    /// Print the result as a JSON report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Partition(#[from] IntervalPartitionError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("cannot parse {field} from '{input}': {message}")]
    Parse {
        field: &'static str,
        input: String,
        message: String,
    },

    #[error("unexpected end of input while reading {0}")]
    EndOfInput(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct IntegrationReport {
    function: SampleFunction,
    rule: QuadratureRule,
    #[serde(serialize_with = "serialize_float")]
    lower: f64,
    #[serde(serialize_with = "serialize_float")]
    upper: f64,
    intervals: i64,
    #[serde(serialize_with = "serialize_float")]
    result: f64,
}

// JSON 沒有 NaN/Infinity，非有限值改以字串 "NaN"、"inf"、"-inf" 輸出
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

fn banner_title(rule: QuadratureRule) -> &'static str {
    match rule {
        QuadratureRule::Simpson => "Simpson's Rule Numerical Integration",
        QuadratureRule::Trapezoid => "Trapezoid Rule Numerical Integration",
    }
}

fn prompt<T, R, W>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    label: &str,
) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::EndOfInput(field));
    }
    let trimmed = line.trim();
    trimmed.parse::<T>().map_err(|error| CliError::Parse {
        field,
        input: trimmed.to_owned(),
        message: error.to_string(),
    })
}

fn prompt_function<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SampleFunction, CliError> {
    writeln!(output, "Choose function to integrate:")?;
    for function in SampleFunction::ALL {
        writeln!(output, "{}", function)?;
    }
    write!(output, "Enter choice (1/2): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::EndOfInput("function choice"));
    }
    Ok(line.parse::<SampleFunction>()?)
}

fn run(args: Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let interactive = args.lower.is_none()
        || args.upper.is_none()
        || args.intervals.is_none()
        || args.function.is_none();
    if interactive {
        let title = banner_title(args.rule);
        writeln!(output, "{}", title)?;
        writeln!(output, "{}", "-".repeat(title.len()))?;
    }

    let lower = match args.lower {
        Some(lower) => lower,
        None => prompt(&mut input, &mut output, "lower limit", "Enter lower limit (a): ")?,
    };
    let upper = match args.upper {
        Some(upper) => upper,
        None => prompt(&mut input, &mut output, "upper limit", "Enter upper limit (b): ")?,
    };
    let intervals = match args.intervals {
        Some(intervals) => intervals,
        None => prompt(
            &mut input,
            &mut output,
            "number of sub-intervals",
            "Enter number of sub-intervals (must be even): ",
        )?,
    };
    let function = match args.function {
        Some(function) => function,
        None => prompt_function(&mut input, &mut output)?,
    };

    let calculator = IntegrationCalculator::new(args.rule);
    info!(
        function = function.description(),
        rule = calculator.engine().name(),
        "starting integration"
    );
    let result = calculator.calculate(|x| function.evaluate(x), lower, upper, intervals)?;

    if args.json {
        let report = IntegrationReport {
            function,
            rule: args.rule,
            lower,
            upper,
            intervals,
            result,
        };
        serde_json::to_writer_pretty(&mut output, &report)?;
        writeln!(output)?;
    } else {
        writeln!(output, "Numerical Integration Result: {}", result)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(%err, "integration failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
