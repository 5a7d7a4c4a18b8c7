pub mod bmi;
pub mod caloric;

pub use bmi::{bmi_category, calculate_bmi, calculate_corrected_bmi, calculate_corrected_bmi_str};
pub use caloric::{calculate_caloric_demand, CaloricDemand};
