use maud::{html, Markup};

use crate::names;

pub fn landing_page(signed_in: bool) -> Markup {
    html! {
        // Hero section
        section.landing-hero {
            h1 { "Know your diabetes risk in minutes" }
            p.landing-hero-desc {
                "HealthWise turns fifteen everyday lifestyle questions into a "
                "personalised diabetes risk assessment. No lab visits, no needles."
            }
            div.landing-cta {
                @if signed_in {
                    a role="button" href=(names::QUIZ_URL) { "Take the assessment" }
                    a role="button" href=(names::DASHBOARD_URL) class="outline" { "View dashboard" }
                } @else {
                    a role="button" href=(names::REGISTER_URL) { "Sign up" }
                    a role="button" href=(names::LOGIN_URL) class="outline" { "Log in" }
                }
            }
        }

        // Features section
        section.landing-features {
            h2 { "How it works" }
            div.landing-features-grid {
                article.landing-feature-card {
                    h3 { "Answer the quiz" }
                    p {
                        "Tell us about your habits: smoking, diet, exercise, sleep, "
                        "stress and family history. It takes less than five minutes."
                    }
                }
                article.landing-feature-card {
                    h3 { "We estimate your clinical profile" }
                    p {
                        "Your answers are translated into estimated clinical markers "
                        "such as glucose, BMI, insulin and blood pressure."
                    }
                }
                article.landing-feature-card {
                    h3 { "Get your risk prediction" }
                    p {
                        "A machine learning model trained on clinical data scores "
                        "your profile and tells you your diabetes risk."
                    }
                }
                article.landing-feature-card {
                    h3 { "Track and improve" }
                    p {
                        "Every assessment is saved. Watch your risk trend on the "
                        "history page and follow tailored recommendations."
                    }
                }
            }
        }

        // Bottom CTA
        section.landing-bottom-cta {
            h2 { "Your health, one quiz away" }
            p {
                "The assessment is informational and not a medical diagnosis. "
                "Always consult a healthcare professional about your results."
            }
            @if !signed_in {
                a role="button" href=(names::REGISTER_URL) { "Sign up" }
            }
        }
    }
}

pub enum RegisterState {
    NoError,
    EmailTaken,
    EmptyFields,
    WeakPassword,
}

pub fn register(state: RegisterState) -> Markup {
    let error_msg = match state {
        RegisterState::NoError => None,
        RegisterState::EmailTaken => Some("An account with this email already exists."),
        RegisterState::EmptyFields => Some("All fields are required."),
        RegisterState::WeakPassword => Some("Password must be at least 8 characters long."),
    };

    html! {
        h1 { "Create your account" }
        p { "Sign up to take the assessment and track your results over time." }
        article style="width: fit-content;" {
            form action=(names::REGISTER_URL) method="post" {
                label {
                    "Email"
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          placeholder="Email"
                          aria-label="Email";
                }
                label {
                    "Display name"
                    input name="display_name"
                          type="text"
                          autocomplete="name"
                          required="true"
                          placeholder="Display name"
                          aria-label="Display name";
                }
                label {
                    "Password"
                    @if let Some(msg) = error_msg {
                        input name="password"
                              type="password"
                              autocomplete="new-password"
                              required="true"
                              placeholder="Password"
                              aria-invalid="true"
                              aria-label="Password";
                        small { (msg) }
                    } @else {
                        input name="password"
                              type="password"
                              autocomplete="new-password"
                              required="true"
                              placeholder="Password"
                              aria-label="Password";
                    }
                }
                button type="submit" { "Sign up" }
            }
            p {
                "Already have an account? "
                a href=(names::LOGIN_URL) { "Log in" }
            }
        }
    }
}

pub enum LoginState {
    NoError,
    IncorrectPassword,
    EmailNotVerified,
}

pub fn login(state: LoginState) -> Markup {
    html! {
        h1 { "Welcome back" }
        p { "Log in to take a new assessment or review your history." }
        article style="width: fit-content;" {
            form action=(names::LOGIN_URL) method="post" {
                label {
                    "Email"
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          placeholder="Email"
                          aria-label="Email";
                }
                label {
                    "Password"
                    @match state {
                        LoginState::NoError => {
                            input name="password"
                                  type="password"
                                  autocomplete="current-password"
                                  required="true"
                                  placeholder="Password"
                                  aria-label="Password";
                        },
                        LoginState::IncorrectPassword => {
                            input name="password"
                                  type="password"
                                  autocomplete="current-password"
                                  required="true"
                                  placeholder="Password"
                                  aria-invalid="true"
                                  aria-label="Password";
                            small { "Incorrect email or password." }
                        },
                        LoginState::EmailNotVerified => {
                            input name="password"
                                  type="password"
                                  autocomplete="current-password"
                                  required="true"
                                  placeholder="Password"
                                  aria-invalid="true"
                                  aria-label="Password";
                            small { "Please verify your email address first." }
                        }
                    }
                }
                button type="submit" { "Log in" }
            }
            p {
                "No account yet? "
                a href=(names::REGISTER_URL) { "Sign up" }
            }
        }
    }
}

pub fn check_email(email: &str) -> Markup {
    html! {
        h1 { "Check your inbox" }
        p { "We sent a verification link to" }
        p { strong { (email) } }
        p { "Click the link in the email to activate your account." }
        article style="width: fit-content;" {
            form hx-post=(names::RESEND_VERIFICATION_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                input type="hidden" name="email" value=(email);
                button type="submit" class="outline" { "Resend email" }
            }
            p {
                a href=(names::LOGIN_URL) { "Back to login" }
            }
        }
    }
}

pub fn email_verified() -> Markup {
    html! {
        h1 { "Email verified" }
        p { "Your account is active. You can log in now." }
        p {
            a href=(names::LOGIN_URL) { "Log in" }
        }
    }
}

pub fn verification_failed() -> Markup {
    html! {
        h1 { "Verification link invalid" }
        p { "The link has expired or was already used. Register again to get a new one." }
        p {
            a href=(names::REGISTER_URL) { "Sign up" }
        }
    }
}
