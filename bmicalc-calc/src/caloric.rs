use bmicalc_model::energy::ActivityLevel;
use bmicalc_model::user::UserData;
use bmicalc_model::Result;
use log::debug;

/// Total daily energy expenditure of a single user.
pub struct CaloricDemand<'a> {
    user: &'a UserData,
}

impl<'a> CaloricDemand<'a> {
    pub fn new(user: &'a UserData) -> Self {
        Self { user }
    }

    /// Basal metabolic rate in kcal per day, Mifflin-St Jeor.
    pub fn bmr(&self) -> f64 {
        let user = self.user;
        if user.gender().is_female() {
            447.6 + 9.2 * user.weight() + 3.1 * user.height_cm() - 4.3 * user.age() as f64
        } else {
            88.36 + 13.4 * user.weight() + 4.8 * user.height_cm() - 5.7 * user.age() as f64
        }
    }

    pub fn calculate(&self, activity: ActivityLevel) -> f64 {
        let bmr = self.bmr();
        let tdee = bmr * activity.multiplier();
        debug!(
            "BMR {:.2} kcal, activity \"{}\" x{} -> TDEE {:.2} kcal",
            bmr,
            activity,
            activity.multiplier(),
            tdee
        );
        tdee
    }
}

/// Caloric demand for the activity option 1 to 6.
pub fn calculate_caloric_demand(user: &UserData, option: u8) -> Result<f64> {
    let activity = ActivityLevel::try_from(option)?;
    Ok(CaloricDemand::new(user).calculate(activity))
}
