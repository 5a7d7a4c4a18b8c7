pub mod config;
pub mod form;
pub mod report;

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::config::Config;
use crate::form::{FormError, Input, RawForm};
use crate::report::Report;

#[derive(Debug, Default, Parser)]
#[command(name = "bmicalc", about = "BMI & Caloric Demand Calculator")]
pub struct Args {
    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<String>,
    /// Height in centimeters
    #[arg(long)]
    pub height: Option<String>,
    /// Age in years
    #[arg(long)]
    pub age: Option<String>,
    /// Gender, "m" or "f"
    #[arg(long)]
    pub gender: Option<String>,
    /// Activity level, 1 (bed rest) to 6 (very heavy exercise)
    #[arg(long)]
    pub activity: Option<String>,
    /// Goal: maintain, loss or gain
    #[arg(long)]
    pub goal: Option<String>,
    /// Also calculate the daily caloric demand
    #[arg(long)]
    pub caloric_demand: bool,
    /// Never prompt for missing values
    #[arg(long)]
    pub no_input: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
    /// RON file with input bounds
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl From<&Args> for RawForm {
    fn from(args: &Args) -> Self {
        Self {
            weight: args.weight.clone(),
            height: args.height.clone(),
            age: args.age.clone(),
            gender: args.gender.clone(),
            activity: args.activity.clone(),
            goal: args.goal.clone(),
            caloric_demand: args.caloric_demand,
        }
    }
}

pub struct Calculator {
    config: Config,
    input: Box<dyn Input>,
}

impl Calculator {
    pub fn new(config: Config, input: Box<dyn Input>) -> Self {
        Self { config, input }
    }

    pub fn run(&mut self, args: &Args) -> Result<Report, FormError> {
        let mut raw = RawForm::from(args);
        if !args.no_input {
            raw.fill_missing(self.input.as_mut())?;
        }

        let form = raw.validate(&self.config.bounds)?;
        info!(
            "Calculating for weight {} kg, height {} cm, age {}, gender {}",
            form.user.weight(),
            form.user.height_cm(),
            form.user.age(),
            form.user.gender()
        );

        let report = Report::calculate(&form)?;
        info!("BMI {:.2} ({})", report.bmi, report.category);
        Ok(report)
    }
}
