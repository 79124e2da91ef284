//! Maps self-reported lifestyle answers to synthetic clinical feature
//! estimates for the prediction model.
//!
//! Every answer is a closed enum rather than a free string, so each
//! adjustment below is an exhaustive `match` and a renamed option label is a
//! compile error instead of a silently ignored branch. Parsing an option
//! label is permissive: anything unrecognized becomes `None` and leaves the
//! corresponding baseline untouched.

use serde::{Deserialize, Serialize};

macro_rules! answer_options {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Option labels in display order, as rendered in the form.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

answer_options!(Smoking {
    None => "None",
    OneToThree => "1-3",
    FourToSeven => "4-7",
    EightToTen => "8-10",
    TenPlus => "10+",
});

answer_options!(Alcohol {
    Never => "Never",
    Occasionally => "Occasionally (1–2 times/week)",
    Regularly => "Regularly (3–5 times/week)",
    Daily => "Daily",
});

answer_options!(Exercise {
    None => "None",
    UnderFifteenMins => "<15 mins",
    FifteenToThirtyMins => "15-30 mins",
    ThirtyToSixtyMins => "30-60 mins",
    OverAnHour => "1+ hour",
});

answer_options!(Diet {
    Healthy => "Healthy",
    Average => "Average",
    HighSugar => "High sugar/junk food",
});

answer_options!(Water {
    UnderOneLitre => "<1L",
    OneToTwoLitres => "1-2L",
    TwoToThreeLitres => "2-3L",
    OverThreeLitres => "3+L",
});

answer_options!(Sleep {
    UnderFourHours => "<4 hrs",
    FourToSixHours => "4-6 hrs",
    SixToEightHours => "6-8 hrs",
    OverEightHours => "8+ hrs",
});

answer_options!(Meals {
    Always => "Always",
    Mostly => "Mostly",
    Rarely => "Rarely",
    Never => "Never",
});

answer_options!(SugarIntake {
    Rarely => "Rarely",
    OnceOrTwiceAWeek => "1–2 times/week",
    SeveralTimesAWeek => "3–5 times/week",
    Daily => "Daily",
});

answer_options!(Stress {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
    VeryHigh => "Very High",
});

answer_options!(ScreenTime {
    UnderOneHour => "<1 hr",
    OneToThreeHours => "1–3 hrs",
    ThreeToFiveHours => "3–5 hrs",
    OverFiveHours => "5+ hrs",
});

answer_options!(FruitVeg {
    Daily => "Daily",
    FewTimesAWeek => "Few times/week",
    Rarely => "Rarely",
    Never => "Never",
});

answer_options!(FamilyHistory {
    No => "No",
    OneParent => "One parent",
    BothParents => "Both parents",
});

answer_options!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

/// The answers a user has selected so far, keyed by question.
///
/// Built incrementally by the quiz form; `age` and `pregnancies` stay raw
/// strings (a number input and a "0".."4+" select respectively) and are
/// parsed permissively when the clinical estimate is computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizAnswers {
    pub smoking: Option<Smoking>,
    pub alcohol: Option<Alcohol>,
    pub exercise: Option<Exercise>,
    pub diet: Option<Diet>,
    pub water: Option<Water>,
    pub sleep: Option<Sleep>,
    pub meals: Option<Meals>,
    pub sugar_intake: Option<SugarIntake>,
    pub stress: Option<Stress>,
    pub screen_time: Option<ScreenTime>,
    pub fruit_veg: Option<FruitVeg>,
    pub family_history: Option<FamilyHistory>,
    pub gender: Option<Gender>,
    pub pregnancies: Option<String>,
    pub age: Option<String>,
}

impl QuizAnswers {
    /// Build answers from submitted form fields. Unknown keys and
    /// unrecognized option values are ignored.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut answers = QuizAnswers::default();
        for (key, value) in entries {
            match key {
                "smoking" => answers.smoking = Smoking::from_label(value),
                "alcohol" => answers.alcohol = Alcohol::from_label(value),
                "exercise" => answers.exercise = Exercise::from_label(value),
                "diet" => answers.diet = Diet::from_label(value),
                "water" => answers.water = Water::from_label(value),
                "sleep" => answers.sleep = Sleep::from_label(value),
                "meals" => answers.meals = Meals::from_label(value),
                "sugarIntake" => answers.sugar_intake = SugarIntake::from_label(value),
                "stress" => answers.stress = Stress::from_label(value),
                "screenTime" => answers.screen_time = ScreenTime::from_label(value),
                "fruitVeg" => answers.fruit_veg = FruitVeg::from_label(value),
                "familyHistory" => answers.family_history = FamilyHistory::from_label(value),
                "gender" => answers.gender = Gender::from_label(value),
                "pregnancies" => {
                    answers.pregnancies = (!value.is_empty()).then(|| value.to_string());
                }
                "age" => answers.age = (!value.is_empty()).then(|| value.to_string()),
                _ => {}
            }
        }
        answers
    }

    /// Whether the pregnancy-count question applies to these answers.
    pub fn pregnancies_applicable(&self) -> bool {
        matches!(self.gender, Some(Gender::Female) | Some(Gender::Other))
    }

    /// Whether every applicable question has an answer. The form refuses to
    /// submit an incomplete set, matching the client-side check.
    pub fn is_complete(&self) -> bool {
        let selects_answered = self.smoking.is_some()
            && self.alcohol.is_some()
            && self.exercise.is_some()
            && self.diet.is_some()
            && self.water.is_some()
            && self.sleep.is_some()
            && self.meals.is_some()
            && self.sugar_intake.is_some()
            && self.stress.is_some()
            && self.screen_time.is_some()
            && self.fruit_veg.is_some()
            && self.family_history.is_some()
            && self.gender.is_some();

        let pregnancies_answered = !self.pregnancies_applicable() || self.pregnancies.is_some();

        selects_answered && pregnancies_answered && self.age.is_some()
    }
}

/// The six estimated clinical features plus age and pregnancies, shaped for
/// the prediction endpoint (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalEstimate {
    pub pregnancies: u32,
    pub glucose: i32,
    pub blood_pressure: i32,
    pub skin_thickness: i32,
    pub insulin: i32,
    pub bmi: i32,
    pub diabetes_pedigree_function: f64,
    pub age: u32,
}

const DEFAULT_AGE: u32 = 30;
const SKIN_THICKNESS: i32 = 20;

/// Derive clinical feature estimates from lifestyle answers.
///
/// Pure and total: every field has a baseline, adjustments from different
/// questions accumulate additively, and absent answers leave the baseline
/// untouched. Values are deliberately not clamped to physiological ranges;
/// stacked adjustments can exceed them.
pub fn map_quiz_to_clinical(answers: &QuizAnswers) -> ClinicalEstimate {
    let mut glucose = 90;
    if let Some(smoking) = answers.smoking {
        glucose += match smoking {
            Smoking::None | Smoking::OneToThree => 0,
            Smoking::FourToSeven => 20,
            Smoking::EightToTen => 30,
            Smoking::TenPlus => 40,
        };
    }
    if let Some(sugar) = answers.sugar_intake {
        glucose += match sugar {
            SugarIntake::Rarely | SugarIntake::OnceOrTwiceAWeek => 0,
            SugarIntake::SeveralTimesAWeek => 15,
            SugarIntake::Daily => 25,
        };
    }
    if answers.alcohol == Some(Alcohol::Daily) {
        glucose += 20;
    }
    if answers.meals == Some(Meals::Never) {
        glucose += 10;
    }

    let mut bmi = 24;
    if let Some(exercise) = answers.exercise {
        bmi += match exercise {
            Exercise::None => 8,
            Exercise::UnderFifteenMins => 5,
            Exercise::FifteenToThirtyMins => 3,
            Exercise::ThirtyToSixtyMins | Exercise::OverAnHour => 0,
        };
    }
    if let Some(screen_time) = answers.screen_time {
        bmi += match screen_time {
            ScreenTime::UnderOneHour | ScreenTime::OneToThreeHours => 0,
            ScreenTime::ThreeToFiveHours => 2,
            ScreenTime::OverFiveHours => 4,
        };
    }
    if let Some(fruit_veg) = answers.fruit_veg {
        bmi += match fruit_veg {
            FruitVeg::Daily | FruitVeg::FewTimesAWeek => 0,
            FruitVeg::Rarely => 1,
            FruitVeg::Never => 2,
        };
    }

    let mut insulin = 90;
    if let Some(diet) = answers.diet {
        insulin += match diet {
            Diet::Healthy => 0,
            Diet::Average => 30,
            Diet::HighSugar => 60,
        };
    }
    if let Some(alcohol) = answers.alcohol {
        insulin += match alcohol {
            Alcohol::Never | Alcohol::Occasionally => 0,
            Alcohol::Regularly => 10,
            Alcohol::Daily => 25,
        };
    }

    let mut blood_pressure = 75;
    if let Some(stress) = answers.stress {
        blood_pressure += match stress {
            Stress::Low | Stress::Moderate => 0,
            Stress::High => 10,
            Stress::VeryHigh => 15,
        };
    }

    // Family history overrides the baseline rather than adding to it.
    let diabetes_pedigree_function = match answers.family_history {
        Some(FamilyHistory::BothParents) => 1.5,
        Some(FamilyHistory::OneParent) => 0.7,
        Some(FamilyHistory::No) | None => 0.3,
    };

    let pregnancies = if answers.gender == Some(Gender::Male) {
        0
    } else {
        answers
            .pregnancies
            .as_deref()
            .map(parse_pregnancies)
            .unwrap_or(0)
    };

    ClinicalEstimate {
        pregnancies,
        glucose,
        blood_pressure,
        skin_thickness: SKIN_THICKNESS,
        insulin,
        bmi,
        diabetes_pedigree_function,
        age: answers.age.as_deref().and_then(parse_age).unwrap_or(DEFAULT_AGE),
    }
}

/// Age falls back to the default when non-numeric or zero.
fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&age| age != 0)
}

/// `"4+"` means four; otherwise take the leading digits (so `"3"` parses
/// even with trailing junk), defaulting to zero.
fn parse_pregnancies(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw == "4+" {
        return 4;
    }
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> ClinicalEstimate {
        ClinicalEstimate {
            pregnancies: 0,
            glucose: 90,
            blood_pressure: 75,
            skin_thickness: 20,
            insulin: 90,
            bmi: 24,
            diabetes_pedigree_function: 0.3,
            age: 30,
        }
    }

    #[test]
    fn empty_answers_yield_baselines() {
        assert_eq!(map_quiz_to_clinical(&QuizAnswers::default()), baseline());
    }

    #[test]
    fn mapping_is_deterministic() {
        let answers = QuizAnswers::from_entries([
            ("smoking", "8-10"),
            ("diet", "Average"),
            ("age", "52"),
        ]);
        assert_eq!(map_quiz_to_clinical(&answers), map_quiz_to_clinical(&answers));
    }

    #[test]
    fn heavy_smoking_raises_glucose_only() {
        let answers = QuizAnswers {
            smoking: Some(Smoking::TenPlus),
            ..Default::default()
        };
        let expected = ClinicalEstimate {
            glucose: 130,
            ..baseline()
        };
        assert_eq!(map_quiz_to_clinical(&answers), expected);
    }

    #[test]
    fn glucose_adjustments_accumulate_unclamped() {
        let answers = QuizAnswers::from_entries([
            ("smoking", "10+"),
            ("sugarIntake", "Daily"),
            ("alcohol", "Daily"),
            ("meals", "Never"),
        ]);
        // 90 + 40 + 25 + 20 + 10, all four contributions at once
        assert_eq!(map_quiz_to_clinical(&answers).glucose, 185);
    }

    #[test]
    fn male_gender_forces_zero_pregnancies() {
        let answers = QuizAnswers::from_entries([("gender", "Male"), ("pregnancies", "3")]);
        assert_eq!(map_quiz_to_clinical(&answers).pregnancies, 0);
    }

    #[test]
    fn pregnancies_parse_from_answer() {
        let answers = QuizAnswers::from_entries([("gender", "Female"), ("pregnancies", "4+")]);
        assert_eq!(map_quiz_to_clinical(&answers).pregnancies, 4);

        let answers = QuizAnswers::from_entries([("gender", "Female"), ("pregnancies", "2")]);
        assert_eq!(map_quiz_to_clinical(&answers).pregnancies, 2);

        let answers = QuizAnswers::from_entries([("gender", "Female")]);
        assert_eq!(map_quiz_to_clinical(&answers).pregnancies, 0);
    }

    #[test]
    fn family_history_overrides_instead_of_adding() {
        let answers = QuizAnswers::from_entries([("familyHistory", "Both parents")]);
        let clinical = map_quiz_to_clinical(&answers);
        assert_eq!(clinical.diabetes_pedigree_function, 1.5);

        let answers = QuizAnswers::from_entries([("familyHistory", "One parent")]);
        assert_eq!(map_quiz_to_clinical(&answers).diabetes_pedigree_function, 0.7);
    }

    #[test]
    fn age_falls_back_on_bad_input() {
        let answers = QuizAnswers::from_entries([("age", "abc")]);
        assert_eq!(map_quiz_to_clinical(&answers).age, 30);

        let answers = QuizAnswers::from_entries([("age", "0")]);
        assert_eq!(map_quiz_to_clinical(&answers).age, 30);

        let answers = QuizAnswers::from_entries([("age", "45")]);
        assert_eq!(map_quiz_to_clinical(&answers).age, 45);
    }

    #[test]
    fn bmi_stacks_exercise_screen_time_and_fruit_veg() {
        let answers = QuizAnswers::from_entries([
            ("exercise", "None"),
            ("screenTime", "5+ hrs"),
            ("fruitVeg", "Never"),
        ]);
        assert_eq!(map_quiz_to_clinical(&answers).bmi, 24 + 8 + 4 + 2);
    }

    #[test]
    fn insulin_combines_diet_and_alcohol() {
        let answers = QuizAnswers::from_entries([
            ("diet", "High sugar/junk food"),
            ("alcohol", "Regularly (3–5 times/week)"),
        ]);
        assert_eq!(map_quiz_to_clinical(&answers).insulin, 90 + 60 + 10);
    }

    #[test]
    fn stress_raises_blood_pressure() {
        let answers = QuizAnswers::from_entries([("stress", "Very High")]);
        assert_eq!(map_quiz_to_clinical(&answers).blood_pressure, 90);
    }

    #[test]
    fn unrecognized_values_leave_baselines_untouched() {
        let answers = QuizAnswers::from_entries([
            ("smoking", "a pack"),
            ("diet", "keto"),
            ("nonsense", "Daily"),
        ]);
        assert_eq!(map_quiz_to_clinical(&answers), baseline());
    }

    #[test]
    fn incomplete_answers_are_detected() {
        let answers = QuizAnswers::from_entries([("smoking", "None"), ("age", "40")]);
        assert!(!answers.is_complete());
    }

    #[test]
    fn pregnancies_only_required_for_female_or_other() {
        let mut entries = vec![
            ("smoking", "None"),
            ("alcohol", "Never"),
            ("exercise", "1+ hour"),
            ("diet", "Healthy"),
            ("water", "2-3L"),
            ("sleep", "6-8 hrs"),
            ("meals", "Always"),
            ("sugarIntake", "Rarely"),
            ("stress", "Low"),
            ("screenTime", "<1 hr"),
            ("fruitVeg", "Daily"),
            ("familyHistory", "No"),
            ("gender", "Male"),
            ("age", "35"),
        ];
        let answers = QuizAnswers::from_entries(entries.iter().copied());
        assert!(answers.is_complete());

        entries[12] = ("gender", "Female");
        let answers = QuizAnswers::from_entries(entries.iter().copied());
        assert!(!answers.is_complete());

        entries.push(("pregnancies", "1"));
        let answers = QuizAnswers::from_entries(entries.iter().copied());
        assert!(answers.is_complete());
    }

    #[test]
    fn estimate_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(baseline()).unwrap();
        for key in [
            "pregnancies",
            "glucose",
            "bloodPressure",
            "skinThickness",
            "insulin",
            "bmi",
            "diabetesPedigreeFunction",
            "age",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
