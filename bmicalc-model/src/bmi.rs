use strum::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    #[strum(to_string = "Severely Underweight")]
    SeverelyUnderweight,
    #[strum(to_string = "Underweight")]
    Underweight,
    #[strum(to_string = "Normal")]
    Normal,
    #[strum(to_string = "Overweight")]
    Overweight,
    #[strum(to_string = "Moderately Obese")]
    ModeratelyObese,
    #[strum(to_string = "Severely Obese")]
    SeverelyObese,
    #[strum(to_string = "Morbidly Obese")]
    MorbidlyObese,
}

impl BmiCategory {
    /// Lookup over the fixed category table. Every real value lands in exactly
    /// one bucket; values between the one-decimal bounds (e.g. 18.45) belong
    /// to the lower bucket.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiCategory::SeverelyUnderweight
        } else if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ModeratelyObese
        } else if bmi < 40.0 {
            BmiCategory::SeverelyObese
        } else {
            BmiCategory::MorbidlyObese
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_table() {
        let test_data = [
            (-1.0, BmiCategory::SeverelyUnderweight),
            (0.0, BmiCategory::SeverelyUnderweight),
            (15.9, BmiCategory::SeverelyUnderweight),
            (16.0, BmiCategory::Underweight),
            (18.4, BmiCategory::Underweight),
            (18.45, BmiCategory::Underweight),
            (18.5, BmiCategory::Normal),
            (24.9, BmiCategory::Normal),
            (24.95, BmiCategory::Normal),
            (25.0, BmiCategory::Overweight),
            (29.9, BmiCategory::Overweight),
            (30.0, BmiCategory::ModeratelyObese),
            (34.9, BmiCategory::ModeratelyObese),
            (35.0, BmiCategory::SeverelyObese),
            (39.9, BmiCategory::SeverelyObese),
            (39.99, BmiCategory::SeverelyObese),
            (40.0, BmiCategory::MorbidlyObese),
            (75.0, BmiCategory::MorbidlyObese),
        ];

        for (i, (bmi, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(BmiCategory::from_bmi(bmi), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn category_labels() {
        assert_eq!(
            BmiCategory::SeverelyUnderweight.to_string(),
            "Severely Underweight"
        );
        assert_eq!(BmiCategory::Normal.to_string(), "Normal");
        assert_eq!(BmiCategory::ModeratelyObese.to_string(), "Moderately Obese");
        assert_eq!(BmiCategory::MorbidlyObese.to_string(), "Morbidly Obese");
    }

    #[test]
    fn categories_are_ordered_along_the_real_line() {
        let mut previous = BmiCategory::from_bmi(0.0) as u8;
        let mut bmi = 0.0;
        while bmi < 60.0 {
            let current = BmiCategory::from_bmi(bmi) as u8;
            assert!(current == previous || current == previous + 1, "bmi {}", bmi);
            previous = current;
            bmi += 0.01;
        }
        assert_eq!(previous, BmiCategory::MorbidlyObese as u8);
    }
}
