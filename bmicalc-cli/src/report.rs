use std::fmt;

use bmicalc_calc::bmi::ADULT_AGE;
use bmicalc_calc::{bmi_category, calculate_bmi, calculate_corrected_bmi, CaloricDemand};
use bmicalc_model::bmi::BmiCategory;
use bmicalc_model::energy::{ActivityLevel, Goal};
use bmicalc_model::Result;
use log::debug;
use serde::Serialize;

use crate::form::ValidatedForm;

/// Colour of the BMI result line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Highlight {
    Underweight,
    Healthy,
    Overweight,
}

impl Highlight {
    /// There is no highlight for values in `[24.9, 25.0)`.
    pub fn from_bmi(bmi: f64) -> Option<Self> {
        if bmi < 18.5 {
            Some(Highlight::Underweight)
        } else if bmi < 24.9 {
            Some(Highlight::Healthy)
        } else if bmi >= 25.0 {
            Some(Highlight::Overweight)
        } else {
            None
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Highlight::Underweight => (0xf3, 0x9c, 0x12),
            Highlight::Healthy => (0x27, 0xae, 0x60),
            Highlight::Overweight => (0xea, 0x35, 0x46),
        }
    }

    /// Wraps `text` in a 24-bit ANSI foreground colour.
    pub fn paint(&self, text: &str) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CaloricDemandReport {
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub bmr: f64,
    pub tdee: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Report {
    pub bmi: f64,
    pub category: BmiCategory,
    pub highlight: Option<Highlight>,
    pub corrected_bmi: Option<f64>,
    pub caloric_demand: Option<CaloricDemandReport>,
}

impl Report {
    pub fn calculate(form: &ValidatedForm) -> Result<Self> {
        let user = &form.user;
        let bmi = calculate_bmi(user.weight(), user.height_cm())?;
        let category = bmi_category(bmi);

        let corrected_bmi = if user.age() >= ADULT_AGE {
            Some(calculate_corrected_bmi(bmi, user.gender(), user.age())?)
        } else {
            debug!("Skipping corrected BMI for age {}", user.age());
            None
        };

        let caloric_demand = form.caloric_demand.map(|request| {
            let demand = CaloricDemand::new(user);
            CaloricDemandReport {
                activity: request.activity,
                goal: request.goal,
                bmr: demand.bmr(),
                tdee: request.goal.adjust(demand.calculate(request.activity)),
            }
        });

        Ok(Self {
            bmi,
            category,
            highlight: Highlight::from_bmi(bmi),
            corrected_bmi,
            caloric_demand,
        })
    }
}

impl Report {
    /// Text report; with `colored` the BMI line carries its highlight.
    pub fn render(&self, colored: bool) -> String {
        let mut out = String::new();
        let bmi_line = format!("BMI: {:.2} ({})", self.bmi, self.category);
        match self.highlight.filter(|_| colored) {
            Some(highlight) => out.push_str(&highlight.paint(&bmi_line)),
            None => out.push_str(&bmi_line),
        }
        out.push('\n');
        if let Some(corrected_bmi) = self.corrected_bmi {
            out.push_str(&format!("Corrected BMI: {:.2}\n", corrected_bmi));
        }
        if let Some(caloric_demand) = &self.caloric_demand {
            out.push_str(&format!("Caloric Demand: {:.2} kcal\n", caloric_demand.tdee));
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
