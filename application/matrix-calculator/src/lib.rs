//! Reads two matrices, runs one operation of `dense-matrix` on them and
//! renders the outcome as text.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use dense_matrix::*;
use serde::Deserialize;

pub const DEFAULT_PRECISION: usize = 2;

/// Operands as written in an input file, both optional so a file may only
/// carry one of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculatorInput {
  #[serde(default)]
  pub a: Option<Matrix>,
  #[serde(default)]
  pub b: Option<Matrix>,
}

pub fn load_input(path: &Path) -> Result<CalculatorInput> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read input file {}", path.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("failed to parse input file {}", path.display()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorArgs {
  pub operation: String,
  pub input: Option<PathBuf>,
  pub a: Option<String>,
  pub b: Option<String>,
  pub angle: Option<f64>,
  pub axis: Option<SkewAxis>,
  pub precision: usize,
}

impl CalculatorArgs {
  pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
    Ok(Self {
      operation: matches
        .get_one::<String>("operation")
        .cloned()
        .context("an operation is required")?,
      input: matches.get_one::<PathBuf>("input").cloned(),
      a: matches.get_one::<String>("a").cloned(),
      b: matches.get_one::<String>("b").cloned(),
      angle: matches.get_one::<f64>("angle").copied(),
      axis: matches.get_one::<SkewAxis>("axis").copied(),
      precision: matches
        .get_one::<usize>("precision")
        .copied()
        .unwrap_or(DEFAULT_PRECISION),
    })
  }

  pub fn operation(&self) -> Result<Operation<f64>> {
    Ok(Operation::from_name(
      &self.operation,
      self.angle.map(Deg::by),
      self.axis,
    )?)
  }

  /// Inline operands win over the input file. The second operand defaults to
  /// the identity sized to multiply with the first.
  pub fn operands(&self) -> Result<(Matrix, Matrix)> {
    let file = match &self.input {
      Some(path) => load_input(path)?,
      None => CalculatorInput::default(),
    };

    let a = match &self.a {
      Some(json) => parse_matrix(json).context("invalid matrix A")?,
      None => file.a.context("matrix A is required, pass -a or an input file")?,
    };
    let b = match (&self.b, file.b) {
      (Some(json), _) => parse_matrix(json).context("invalid matrix B")?,
      (None, Some(b)) => b,
      (None, None) => {
        log::info!("no matrix B given, using the {0}x{0} identity", a.cols());
        Matrix::identity(a.cols())?
      }
    };
    Ok((a, b))
  }
}

pub fn parse_matrix(json: &str) -> Result<Matrix> {
  Ok(serde_json::from_str(json)?)
}

pub fn command() -> Command {
  Command::new("matrix-calculator")
    .version(clap::crate_version!())
    .about("Dense matrix arithmetic, determinants and grid transforms")
    .arg_required_else_help(true)
    .arg(
      Arg::new("operation")
        .help("Operation to run on matrix A (and B for binary operations)")
        .required(true)
        .ignore_case(true)
        .value_parser(Operation::<f64>::NAMES),
    )
    .arg(
      Arg::new("input")
        .short('i')
        .long("input")
        .help("JSON file holding the operands as {\"a\": [[..]], \"b\": [[..]]}")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath),
    )
    .arg(
      Arg::new("a")
        .short('a')
        .help("Matrix A as a JSON array of rows, overrides the input file"),
    )
    .arg(
      Arg::new("b")
        .short('b')
        .help("Matrix B as a JSON array of rows, overrides the input file. Defaults to identity"),
    )
    .arg(
      Arg::new("angle")
        .long("angle")
        .help("Angle in degrees for skew and rotate [default: 45]")
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64)),
    )
    .arg(
      Arg::new("axis")
        .long("axis")
        .help("Skew axis, x shifts by row index and y by column index [default: x]")
        .value_parser(|s: &str| s.parse::<SkewAxis>()),
    )
    .arg(
      Arg::new("precision")
        .short('p')
        .long("precision")
        .help("Decimals printed for every value")
        .default_value("2")
        .value_parser(clap::value_parser!(usize)),
    )
}

pub fn render(output: &OperationOutput<f64>, precision: usize) -> String {
  match output {
    OperationOutput::Matrix(m) => m.display_with_precision(precision).to_string(),
    OperationOutput::Scalar(v) => format!("Determinant: {v:.precision$}"),
  }
}

pub fn run(args: &CalculatorArgs) -> Result<String> {
  let operation = args.operation()?;
  let (a, b) = args.operands()?;
  let output = operation
    .apply(&a, &b)
    .with_context(|| format!("{} failed", operation.name()))?;
  Ok(render(&output, args.precision))
}

#[cfg(test)]
mod test {
  use super::*;

  fn args(line: &[&str]) -> CalculatorArgs {
    let matches = command()
      .try_get_matches_from(std::iter::once("matrix-calculator").chain(line.iter().copied()))
      .unwrap();
    CalculatorArgs::from_matches(&matches).unwrap()
  }

  #[test]
  fn parse_arguments() {
    let parsed = args(&["skew", "-a", "[[1,2]]", "--angle", "-30", "--axis", "y", "-p", "3"]);
    assert_eq!(parsed.angle, Some(-30.));
    assert_eq!(parsed.axis, Some(SkewAxis::Y));
    assert_eq!(parsed.precision, 3);
    assert_eq!(
      parsed.operation().unwrap(),
      Operation::Skew {
        angle: Deg::by(-30.),
        axis: SkewAxis::Y
      }
    );

    let parsed = args(&["ROTATE", "-a", "[[1]]"]);
    assert_eq!(parsed.precision, DEFAULT_PRECISION);
    assert_eq!(
      parsed.operation().unwrap(),
      Operation::Rotate { angle: Deg::by(45.) }
    );

    assert!(command()
      .try_get_matches_from(["matrix-calculator", "invert"])
      .is_err());
    assert!(command()
      .try_get_matches_from(["matrix-calculator", "skew", "--axis", "z"])
      .is_err());
  }

  #[test]
  fn second_operand_defaults_to_identity() {
    let (a, b) = args(&["multiply", "-a", "[[1,2,3],[4,5,6]]"]).operands().unwrap();
    assert_eq!(a.shape(), Shape::new(2, 3));
    assert_eq!(b, Matrix::identity(3).unwrap());
  }

  #[test]
  fn missing_first_operand() {
    assert!(args(&["transpose"]).operands().is_err());
  }

  #[test]
  fn rendering() {
    let m = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
    assert_eq!(
      render(&OperationOutput::Matrix(m), 1),
      "[1.0 2.0]\n[3.0 4.0]"
    );
    assert_eq!(
      render(&OperationOutput::Scalar(-2.), 2),
      "Determinant: -2.00"
    );
  }

  #[test]
  fn run_reports_library_errors() {
    let err = run(&args(&["determinant", "-a", "[[1,2,3]]"])).unwrap_err();
    assert_eq!(err.to_string(), "determinant failed");
    assert_eq!(
      err.root_cause().to_string(),
      "matrix must be square, got 1x3"
    );

    let err = run(&args(&["add", "-a", "[[1,2]]", "-b", "[[1],[2]]"])).unwrap_err();
    assert_eq!(
      err.root_cause().to_string(),
      "add requires equal row counts, got 1x2 and 2x1"
    );
  }
}
