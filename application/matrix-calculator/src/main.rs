use anyhow::Result;
use log::LevelFilter;
use matrix_calculator::{command, run, CalculatorArgs};

fn main() -> Result<()> {
  env_logger::Builder::default()
    .filter_level(LevelFilter::Warn)
    .parse_env(env_logger::Env::default().filter_or("MATRIX_CALCULATOR_LOG", "warn"))
    .init();

  let matches = command().get_matches();
  let args = CalculatorArgs::from_matches(&matches)?;
  println!("{}", run(&args)?);
  Ok(())
}
