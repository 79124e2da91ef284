use maud::{html, Markup};

use crate::names;
use crate::questions::{quiz_questions, QuestionInput, PREGNANCY_OPTIONS};

pub enum QuizFormState {
    NoError,
    Unanswered,
    PredictorUnavailable,
}

pub fn quiz_page(state: QuizFormState) -> Markup {
    let error_msg = match state {
        QuizFormState::NoError => None,
        QuizFormState::Unanswered => Some("Please answer every question before submitting."),
        QuizFormState::PredictorUnavailable => {
            Some("The prediction service is currently unavailable. Please try again in a moment.")
        }
    };

    html! {
        h1 { "Health Assessment" }
        p { "Answer a few questions about your lifestyle to estimate your diabetes risk." }

        @if let Some(msg) = error_msg {
            article.quiz-error {
                p { (msg) }
            }
        }

        article style="max-width: 40rem;" {
            form action=(names::QUIZ_URL) method="post" {
                @for question in quiz_questions() {
                    @match &question.input {
                        QuestionInput::Select(options) => {
                            // The pregnancy question starts hidden and is swapped
                            // in when a gender that it applies to is picked.
                            @if question.gender_gated {
                                (pregnancies_field(false))
                            } @else {
                                label {
                                    (question.prompt)
                                    @if question.id == "gender" {
                                        select name=(question.id)
                                               required="true"
                                               aria-label=(question.prompt)
                                               hx-get=(names::PREGNANCIES_FRAGMENT_URL)
                                               hx-trigger="change"
                                               hx-target="#pregnancies-field"
                                               hx-swap="outerHTML" {
                                            option value="" selected disabled { "Select..." }
                                            @for option in *options {
                                                option value=(option) { (option) }
                                            }
                                        }
                                    } @else {
                                        select name=(question.id)
                                               required="true"
                                               aria-label=(question.prompt) {
                                            option value="" selected disabled { "Select..." }
                                            @for option in *options {
                                                option value=(option) { (option) }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        QuestionInput::Number => {
                            label {
                                (question.prompt)
                                input name=(question.id)
                                      type="number"
                                      min="1"
                                      required="true"
                                      placeholder="Age in years"
                                      aria-label=(question.prompt);
                            }
                        }
                    }
                }
                button type="submit" { "Get my prediction" }
            }
        }
    }
}

/// The gender-gated pregnancy question, rendered as an htmx swap target so
/// changing the gender select shows or hides it without a full page reload.
pub fn pregnancies_field(applicable: bool) -> Markup {
    html! {
        @if applicable {
            div id="pregnancies-field" {
                label {
                    "How many times have you been pregnant?"
                    select name="pregnancies"
                           required="true"
                           aria-label="How many times have you been pregnant?" {
                        option value="" selected disabled { "Select..." }
                        @for option in PREGNANCY_OPTIONS {
                            option value=(option) { (option) }
                        }
                    }
                }
            }
        } @else {
            div id="pregnancies-field" {}
        }
    }
}
