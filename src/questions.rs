//! The quiz question catalog: prompts and option vocabularies for the
//! lifestyle assessment form, in display order.
//!
//! Option lists come straight from the answer enums in [`crate::clinical`],
//! so the rendered form and the answer parser share one vocabulary.

use crate::clinical::{
    Alcohol, Diet, Exercise, FamilyHistory, FruitVeg, Gender, Meals, QuizAnswers, ScreenTime,
    Sleep, Smoking, Stress, SugarIntake, Water,
};

pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub input: QuestionInput,
    /// Only asked when the gender answer is Female or Other.
    pub gender_gated: bool,
}

pub enum QuestionInput {
    Select(&'static [&'static str]),
    Number,
}

impl QuizQuestion {
    pub fn applies(&self, answers: &QuizAnswers) -> bool {
        !self.gender_gated || answers.pregnancies_applicable()
    }
}

pub const PREGNANCY_OPTIONS: &[&str] = &["0", "1", "2", "3", "4+"];

pub fn quiz_questions() -> &'static [QuizQuestion] {
    const QUESTIONS: &[QuizQuestion] = &[
        QuizQuestion {
            id: "smoking",
            prompt: "How many cigarettes do you smoke per day?",
            input: QuestionInput::Select(Smoking::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "alcohol",
            prompt: "How often do you consume alcohol?",
            input: QuestionInput::Select(Alcohol::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "exercise",
            prompt: "How long do you walk or exercise in the morning?",
            input: QuestionInput::Select(Exercise::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "diet",
            prompt: "How would you describe your daily diet?",
            input: QuestionInput::Select(Diet::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "water",
            prompt: "How much water do you drink daily?",
            input: QuestionInput::Select(Water::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "sleep",
            prompt: "How well do you sleep?",
            input: QuestionInput::Select(Sleep::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "meals",
            prompt: "Do you have your meals at regular times every day?",
            input: QuestionInput::Select(Meals::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "sugarIntake",
            prompt: "How often do you eat sugary snacks or desserts?",
            input: QuestionInput::Select(SugarIntake::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "stress",
            prompt: "How would you describe your daily stress levels?",
            input: QuestionInput::Select(Stress::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "screenTime",
            prompt: "How many hours do you spend on screens (phone, TV, computer) daily?",
            input: QuestionInput::Select(ScreenTime::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "fruitVeg",
            prompt: "How often do you eat fresh fruits and vegetables?",
            input: QuestionInput::Select(FruitVeg::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "familyHistory",
            prompt: "Do you have a family history of diabetes?",
            input: QuestionInput::Select(FamilyHistory::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "gender",
            prompt: "What is your gender?",
            input: QuestionInput::Select(Gender::LABELS),
            gender_gated: false,
        },
        QuizQuestion {
            id: "pregnancies",
            prompt: "How many times have you been pregnant?",
            input: QuestionInput::Select(PREGNANCY_OPTIONS),
            gender_gated: true,
        },
        QuizQuestion {
            id: "age",
            prompt: "What is your age?",
            input: QuestionInput::Number,
            gender_gated: false,
        },
    ];
    QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_select_option_parses_back_into_its_enum() {
        // The catalog and the parser must agree on the vocabulary.
        for question in quiz_questions() {
            let QuestionInput::Select(options) = &question.input else {
                continue;
            };
            for option in *options {
                let answers = QuizAnswers::from_entries([(question.id, *option)]);
                let parsed = match question.id {
                    "smoking" => answers.smoking.is_some(),
                    "alcohol" => answers.alcohol.is_some(),
                    "exercise" => answers.exercise.is_some(),
                    "diet" => answers.diet.is_some(),
                    "water" => answers.water.is_some(),
                    "sleep" => answers.sleep.is_some(),
                    "meals" => answers.meals.is_some(),
                    "sugarIntake" => answers.sugar_intake.is_some(),
                    "stress" => answers.stress.is_some(),
                    "screenTime" => answers.screen_time.is_some(),
                    "fruitVeg" => answers.fruit_veg.is_some(),
                    "familyHistory" => answers.family_history.is_some(),
                    "gender" => answers.gender.is_some(),
                    "pregnancies" => answers.pregnancies.is_some(),
                    other => panic!("unknown question id {other}"),
                };
                assert!(parsed, "option '{option}' for '{}' did not parse", question.id);
            }
        }
    }

    #[test]
    fn pregnancies_question_is_gender_gated() {
        let question = quiz_questions()
            .iter()
            .find(|q| q.id == "pregnancies")
            .unwrap();

        assert!(!question.applies(&QuizAnswers::default()));

        let answers = QuizAnswers::from_entries([("gender", "Other")]);
        assert!(question.applies(&answers));
    }
}
