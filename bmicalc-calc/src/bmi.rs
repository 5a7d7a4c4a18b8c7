use bmicalc_model::bmi::BmiCategory;
use bmicalc_model::user::Gender;
use bmicalc_model::{Error, Result};
use log::debug;

/// Minimum age for which the corrected BMI regression applies.
pub const ADULT_AGE: u32 = 18;

/// Body mass index from weight in kilograms and height in centimeters.
pub fn calculate_bmi(weight: f64, height: f64) -> Result<f64> {
    if height.is_nan() || weight.is_nan() || height <= 0.0 || weight <= 0.0 {
        return Err(Error::invalid_argument("Invalid height or weight!"));
    }

    let height_m = height / 100.0;
    Ok(weight / height_m.powf(2.0))
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    BmiCategory::from_bmi(bmi)
}

/// Age and gender corrected BMI. Only defined for adults.
pub fn calculate_corrected_bmi(bmi: f64, gender: Gender, age: u32) -> Result<f64> {
    if age < ADULT_AGE {
        return Err(Error::invalid_argument(format!(
            "Corrected BMI requires age of at least {}, got {}",
            ADULT_AGE, age
        )));
    }

    let gender_indicator = if gender.is_female() { 0.0 } else { 1.0 };
    let corrected = 1.39 * bmi + 0.16 * age as f64 - 10.34 * gender_indicator - 9.0;
    debug!(
        "Corrected BMI {:.2} -> {:.2} (gender {}, age {})",
        bmi, corrected, gender, age
    );
    Ok(corrected)
}

/// Same as [`calculate_corrected_bmi`], taking the raw `"m"`/`"f"` token.
pub fn calculate_corrected_bmi_str(bmi: f64, gender: &str, age: u32) -> Result<f64> {
    calculate_corrected_bmi(bmi, gender.parse()?, age)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn bmi_of_reference_person() {
        let bmi = calculate_bmi(70.0, 175.0).unwrap();
        assert!((bmi - 22.857142857142858).abs() < EPSILON);
    }

    #[test]
    fn bmi_rejects_non_positive_input() {
        let test_data = [
            (0.0, 175.0),
            (-70.0, 175.0),
            (70.0, 0.0),
            (70.0, -175.0),
            (0.0, 0.0),
            (f64::NAN, 175.0),
        ];

        for (i, (weight, height)) in test_data.into_iter().enumerate() {
            assert!(
                matches!(calculate_bmi(weight, height), Err(Error::InvalidArgument(_))),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn bmi_is_positive_and_monotonic() {
        let weights = [30.0, 45.5, 70.0, 120.0, 560.0];
        let heights = [50.0, 120.0, 175.0, 210.0, 300.0];

        for weight in weights {
            for pair in heights.windows(2) {
                let shorter = calculate_bmi(weight, pair[0]).unwrap();
                let taller = calculate_bmi(weight, pair[1]).unwrap();
                assert!(shorter > 0.0 && taller > 0.0);
                assert!(shorter > taller, "weight {}, heights {:?}", weight, pair);
            }
        }

        for height in heights {
            for pair in weights.windows(2) {
                let lighter = calculate_bmi(pair[0], height).unwrap();
                let heavier = calculate_bmi(pair[1], height).unwrap();
                assert!(lighter < heavier, "height {}, weights {:?}", height, pair);
            }
        }
    }

    #[test]
    fn bmi_is_deterministic() {
        let first = calculate_bmi(81.3, 182.4).unwrap();
        let second = calculate_bmi(81.3, 182.4).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn bmi_category_examples() {
        assert_eq!(bmi_category(15.9), BmiCategory::SeverelyUnderweight);
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(40.0), BmiCategory::MorbidlyObese);
        assert_eq!(
            bmi_category(calculate_bmi(70.0, 175.0).unwrap()).to_string(),
            "Normal"
        );
    }

    #[test]
    fn corrected_bmi() {
        let test_data = [
            (22.0, Gender::Male, 30, 1.39 * 22.0 + 0.16 * 30.0 - 10.34 - 9.0),
            (22.0, Gender::Female, 30, 1.39 * 22.0 + 0.16 * 30.0 - 9.0),
            (30.5, Gender::Male, 18, 1.39 * 30.5 + 0.16 * 18.0 - 10.34 - 9.0),
            (19.2, Gender::Female, 65, 1.39 * 19.2 + 0.16 * 65.0 - 9.0),
        ];

        for (i, (bmi, gender, age, expected_output)) in test_data.into_iter().enumerate() {
            let corrected = calculate_corrected_bmi(bmi, gender, age).unwrap();
            assert!(
                (corrected - expected_output).abs() < EPSILON,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn corrected_bmi_requires_adult() {
        assert!(matches!(
            calculate_corrected_bmi(22.0, Gender::Male, 17),
            Err(Error::InvalidArgument(_))
        ));
        assert!(calculate_corrected_bmi(22.0, Gender::Male, 18).is_ok());
    }

    #[test]
    fn corrected_bmi_from_token() {
        assert!(matches!(
            calculate_corrected_bmi_str(22.0, "z", 30),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            calculate_corrected_bmi_str(22.0, "m", 17),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(
            calculate_corrected_bmi_str(22.0, "F", 30),
            calculate_corrected_bmi(22.0, Gender::Female, 30)
        );
    }
}
