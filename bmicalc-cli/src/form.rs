use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bmicalc_model::energy::{ActivityLevel, Goal};
use bmicalc_model::user::{Gender, UserData};
use log::{debug, warn};
use strum::Display;

use crate::config::InputBounds;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Field {
    #[strum(to_string = "weight")]
    Weight,
    #[strum(to_string = "height")]
    Height,
    #[strum(to_string = "age")]
    Age,
    #[strum(to_string = "gender")]
    Gender,
    #[strum(to_string = "activity level")]
    ActivityLevel,
    #[strum(to_string = "goal")]
    Goal,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Weight => "Weight (kg)",
            Field::Height => "Height (cm)",
            Field::Age => "Age",
            Field::Gender => "Gender (m/f)",
            Field::ActivityLevel => "Activity Level (1-6)",
            Field::Goal => "Goal (maintain/loss/gain)",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Invalid input \"{input}\" for {field}. Please enter valid numbers.")]
    Parse { field: Field, input: String },
    #[error("Unknown {field} \"{input}\".")]
    UnknownOption { field: Field, input: String },
    #[error("Please enter a valid {0}.")]
    OutOfRange(Field),
    #[error("Missing value for {0}.")]
    Missing(Field),
    #[error("failed to read {0}")]
    Io(Field, #[source] io::Error),
    #[error(transparent)]
    Calculation(#[from] bmicalc_model::Error),
}

type Result<T> = std::result::Result<T, FormError>;

/// Source of answers for form fields that were not given up front.
#[mockall::automock]
pub trait Input {
    fn prompt(&mut self, label: &str) -> io::Result<String>;
}

/// Reads answers line by line. Prompts go to `writer`, which is stderr by
/// default so that stdout only ever carries the report.
pub struct StdinInput<R, W> {
    reader: R,
    writer: W,
}

impl StdinInput<io::StdinLock<'static>, io::Stderr> {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
            writer: io::stderr(),
        }
    }
}

impl Default for StdinInput<io::StdinLock<'static>, io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinInput<R, W> {
    pub fn from_parts(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Input for StdinInput<R, W> {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.writer, "{}: ", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_owned())
    }
}

/// Form contents exactly as entered, before any parsing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawForm {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub activity: Option<String>,
    pub goal: Option<String>,
    pub caloric_demand: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaloricDemandRequest {
    pub activity: ActivityLevel,
    pub goal: Goal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedForm {
    pub user: UserData,
    pub caloric_demand: Option<CaloricDemandRequest>,
}

impl RawForm {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::ActivityLevel => &mut self.activity,
            Field::Goal => &mut self.goal,
        }
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Age, Field::Gender, Field::Height, Field::Weight];
        if self.caloric_demand {
            fields.extend([Field::ActivityLevel, Field::Goal]);
        }
        fields
    }

    /// Asks `input` for every field that has no value yet, in form order.
    pub fn fill_missing(&mut self, input: &mut dyn Input) -> Result<()> {
        for field in self.fields() {
            let slot = self.slot(field);
            if slot.is_none() {
                let answer = input
                    .prompt(field.label())
                    .map_err(|e| FormError::Io(field, e))?;
                debug!("Read {} = {:?}", field, answer);
                *slot = Some(answer);
            }
        }
        Ok(())
    }

    /// Parses all fields and checks them against `bounds`.
    ///
    /// Numbers are parsed before any range is checked, so a malformed value
    /// is reported even when another field is out of range.
    pub fn validate(&self, bounds: &InputBounds) -> Result<ValidatedForm> {
        let weight: f64 = parse_number(Field::Weight, &self.weight)?;
        let height: f64 = parse_number(Field::Height, &self.height)?;
        let age: u32 = parse_number(Field::Age, &self.age)?;

        if !bounds.weight.contains(weight) {
            warn!("Weight {} outside of {}", weight, bounds.weight);
            return Err(FormError::OutOfRange(Field::Weight));
        }
        if !bounds.height.contains(height) {
            warn!("Height {} outside of {}", height, bounds.height);
            return Err(FormError::OutOfRange(Field::Height));
        }
        if !bounds.age.contains(age) {
            warn!("Age {} outside of {}", age, bounds.age);
            return Err(FormError::OutOfRange(Field::Age));
        }

        let gender: Gender = required(Field::Gender, &self.gender)?.parse()?;
        let user = UserData::new(weight, height, age, gender);

        let caloric_demand = if self.caloric_demand {
            Some(CaloricDemandRequest {
                activity: self.activity_level()?,
                goal: self.goal()?,
            })
        } else {
            None
        };

        Ok(ValidatedForm {
            user,
            caloric_demand,
        })
    }

    fn activity_level(&self) -> Result<ActivityLevel> {
        match non_empty(&self.activity) {
            None => Ok(ActivityLevel::BedRest),
            Some(input) => {
                let option: u8 = input.parse().map_err(|_| FormError::Parse {
                    field: Field::ActivityLevel,
                    input: input.to_owned(),
                })?;
                Ok(ActivityLevel::try_from(option)?)
            }
        }
    }

    fn goal(&self) -> Result<Goal> {
        match non_empty(&self.goal) {
            None => Ok(Goal::default()),
            Some(input) => Goal::from_str(input).map_err(|_| FormError::UnknownOption {
                field: Field::Goal,
                input: input.to_owned(),
            }),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required(field: Field, value: &Option<String>) -> Result<&str> {
    value
        .as_deref()
        .map(str::trim)
        .ok_or(FormError::Missing(field))
}

fn parse_number<T: FromStr>(field: Field, value: &Option<String>) -> Result<T> {
    let input = required(field, value)?;
    input.parse().map_err(|_| {
        warn!("Cannot parse {} from {:?}", field, input);
        FormError::Parse {
            field,
            input: input.to_owned(),
        }
    })
}
