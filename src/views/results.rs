use maud::{html, Markup, PreEscaped};

use crate::clinical::ClinicalEstimate;
use crate::db::models::PredictionRecord;
use crate::names;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.7/dist/chart.umd.min.js";

const ACTUAL_COLOR: &str = "#3182ce";
const RECOMMENDED_COLOR: &str = "#82ca9d";
const DIABETIC_COLOR: &str = "rgba(239, 68, 68, 0.7)";
const NON_DIABETIC_COLOR: &str = "rgba(16, 185, 129, 0.7)";

/// Display name, actual value, recommended healthy value and unit for each
/// charted clinical feature.
fn feature_rows(clinical: &ClinicalEstimate) -> [(&'static str, f64, f64, &'static str); 6] {
    [
        ("Glucose", clinical.glucose as f64, 100.0, "mg/dL"),
        ("Blood Pressure", clinical.blood_pressure as f64, 80.0, "mm Hg"),
        ("Skin Thickness", clinical.skin_thickness as f64, 20.0, "mm"),
        ("Insulin", clinical.insulin as f64, 85.0, "mu U/ml"),
        ("BMI", clinical.bmi as f64, 25.0, "kg/m²"),
        (
            "Diabetes Pedigree Function",
            clinical.diabetes_pedigree_function,
            0.5,
            "",
        ),
    ]
}

/// A prediction result ready for display, either fresh from a submission or
/// reconstructed from a stored record.
pub struct AssessmentResult<'a> {
    pub prediction: &'a str,
    pub probability: f64,
    pub message: Option<&'a str>,
    pub clinical: ClinicalEstimate,
}

impl AssessmentResult<'_> {
    fn is_diabetic(&self) -> bool {
        self.prediction == "Diabetic"
    }

    fn risk_percent(&self) -> i32 {
        (self.probability * 100.0).round() as i32
    }
}

pub fn dashboard(result: Option<&AssessmentResult>) -> Markup {
    let Some(result) = result else {
        return html! {
            section.empty-state {
                h2 { "No prediction data found." }
                p { "Take the assessment to see your health overview here." }
                a role="button" href=(names::QUIZ_URL) { "Take Assessment" }
            }
        };
    };

    let risk_class = if result.is_diabetic() {
        "result-card high-risk"
    } else {
        "result-card low-risk"
    };

    html! {
        h1 { "Your Health Overview" }

        article class=(risk_class) {
            div.result-card-body {
                div {
                    h2 { "Your Assessment Result" }
                    p.result-label {
                        @if result.is_diabetic() { "High Risk" } @else { "Low Risk" }
                    }
                    @if let Some(message) = result.message {
                        p { (message) }
                    }
                    div.result-actions {
                        a role="button" href=(names::QUIZ_URL) { "New Assessment" }
                        a role="button" href=(names::RECOMMENDATION_URL) class="outline" {
                            "Get Recommendations"
                        }
                    }
                }
                div.risk-badge {
                    (result.risk_percent()) "%"
                }
            }
        }

        article {
            h3 { "Actual vs Recommended Clinical Features" }
            p {
                "Blue bars show your estimated clinical metrics. "
                "Green bars are healthy recommended values."
            }
            div style="position: relative; width: 100%; max-height: 400px;" {
                canvas id="features-chart" {}
            }
            (features_chart_script(&result.clinical))
        }

        article {
            h4 { "Interpretation Table" }
            table {
                thead {
                    tr {
                        th { "Metric" }
                        th { "Your Value" }
                        th { "Recommended" }
                        th { "Units" }
                    }
                }
                tbody {
                    @for (name, actual, recommended, unit) in feature_rows(&result.clinical) {
                        tr {
                            td { (name) }
                            td { (format!("{actual:.1}")) }
                            td { (recommended) }
                            td { (unit) }
                        }
                    }
                }
            }
        }

        div.info-cards {
            article {
                h2 { "What is Diabetes?" }
                p {
                    "Diabetes is a chronic health condition that affects how your body "
                    "turns food into energy. With diabetes, your body either doesn't "
                    "make enough insulin or can't use it properly."
                }
            }
            article {
                h2 { "About Our Prediction Model" }
                p {
                    "Our model predicts diabetes risk by converting lifestyle data into "
                    "clinical insights. It is intended for awareness and early "
                    "self-assessment, not a medical diagnosis."
                }
            }
        }
    }
}

fn features_chart_script(clinical: &ClinicalEstimate) -> Markup {
    let rows = feature_rows(clinical);
    let labels: Vec<&str> = rows.iter().map(|(name, ..)| *name).collect();
    let actual: Vec<f64> = rows.iter().map(|&(_, actual, ..)| actual).collect();
    let recommended: Vec<f64> = rows.iter().map(|&(_, _, rec, _)| rec).collect();

    let labels_json = serde_json::to_string(&labels).unwrap_or_default();
    let actual_json = serde_json::to_string(&actual).unwrap_or_default();
    let recommended_json = serde_json::to_string(&recommended).unwrap_or_default();

    let script = format!(
        r#"(function(){{
var s=document.createElement('script');
s.src='{CHART_JS_URL}';
s.onload=function(){{
var ctx=document.getElementById('features-chart');
if(!ctx)return;
new Chart(ctx,{{type:'bar',data:{{labels:{labels_json},datasets:[{{label:'Actual',data:{actual_json},backgroundColor:'{ACTUAL_COLOR}'}},{{label:'Recommended',data:{recommended_json},backgroundColor:'{RECOMMENDED_COLOR}'}}]}},options:{{indexAxis:'y',responsive:true,plugins:{{legend:{{position:'bottom'}}}},scales:{{x:{{beginAtZero:true}}}}}}}});
}};
document.head.appendChild(s);
}})()"#
    );

    html! {
        (PreEscaped(format!("<script>{script}</script>")))
    }
}

/// A history row with the clinical input it was predicted from, when the
/// stored JSON still parses.
pub struct HistoryEntry {
    pub record: PredictionRecord,
    pub clinical: Option<ClinicalEstimate>,
}

pub fn history(entries: &[HistoryEntry]) -> Markup {
    html! {
        h1 { "Your Prediction History" }
        p { "View your past diabetes risk assessments and track changes over time." }

        @if entries.is_empty() {
            section.empty-state {
                h2 { "No predictions yet" }
                p {
                    "You haven't made any diabetes risk assessments yet. "
                    "Take the assessment to make your first prediction."
                }
                a role="button" href=(names::QUIZ_URL) { "Take Assessment" }
            }
        } @else {
            article {
                div style="position: relative; width: 100%; max-height: 400px;" {
                    canvas id="history-chart" {}
                }
                (history_chart_script(entries))
            }

            article {
                h2 { "Detailed History" }
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Result" }
                            th { "Risk %" }
                            th { "Age" }
                            th { "BMI" }
                            th { "Glucose" }
                        }
                    }
                    tbody {
                        @for entry in entries {
                            tr {
                                td { (entry.record.created_at) }
                                td {
                                    @if entry.record.is_diabetic() {
                                        span.badge.high-risk { "High Risk" }
                                    } @else {
                                        span.badge.low-risk { "Low Risk" }
                                    }
                                }
                                td { (entry.record.risk_percent()) "%" }
                                @if let Some(clinical) = &entry.clinical {
                                    td { (clinical.age) }
                                    td { (clinical.bmi) }
                                    td { (clinical.glucose) }
                                } @else {
                                    td { "-" }
                                    td { "-" }
                                    td { "-" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn history_chart_script(entries: &[HistoryEntry]) -> Markup {
    // Entries arrive newest first; the chart reads left to right in time.
    let chronological: Vec<&HistoryEntry> = entries.iter().rev().collect();

    let labels: Vec<&str> = chronological
        .iter()
        .map(|e| e.record.created_at.as_str())
        .collect();
    let risks: Vec<i32> = chronological
        .iter()
        .map(|e| e.record.risk_percent())
        .collect();
    let colors: Vec<&str> = chronological
        .iter()
        .map(|e| {
            if e.record.is_diabetic() {
                DIABETIC_COLOR
            } else {
                NON_DIABETIC_COLOR
            }
        })
        .collect();

    let labels_json = serde_json::to_string(&labels).unwrap_or_default();
    let risks_json = serde_json::to_string(&risks).unwrap_or_default();
    let colors_json = serde_json::to_string(&colors).unwrap_or_default();

    let script = format!(
        r#"(function(){{
var s=document.createElement('script');
s.src='{CHART_JS_URL}';
s.onload=function(){{
var ctx=document.getElementById('history-chart');
if(!ctx)return;
new Chart(ctx,{{type:'bar',data:{{labels:{labels_json},datasets:[{{label:'Diabetes Risk (%)',data:{risks_json},backgroundColor:{colors_json},borderWidth:1}}]}},options:{{responsive:true,plugins:{{legend:{{position:'top'}},title:{{display:true,text:'Diabetes Risk History'}}}},scales:{{y:{{beginAtZero:true,max:100,title:{{display:true,text:'Risk Percentage'}}}}}}}}}});
}};
document.head.appendChild(s);
}})()"#
    );

    html! {
        (PreEscaped(format!("<script>{script}</script>")))
    }
}

const DIABETIC_TIPS: &[&str] = &[
    "Monitor your blood sugar levels daily.",
    "Avoid sugary and processed foods.",
    "Maintain a low-carb, high-fiber diet.",
    "Exercise regularly (at least 30 minutes daily).",
    "Stay hydrated with water, not sugary drinks.",
    "Take prescribed medications regularly.",
    "Quit smoking and limit alcohol.",
    "Get regular checkups with your doctor.",
    "Manage stress with meditation or yoga.",
    "Get at least 7-8 hours of sleep.",
    "Track your carbohydrate intake.",
    "Limit salt to control blood pressure.",
    "Eat smaller, more frequent meals.",
    "Avoid skipping meals.",
    "Join a diabetes support group if needed.",
];

const NON_DIABETIC_TIPS: &[&str] = &[
    "Maintain a healthy weight through balanced diet.",
    "Exercise at least 5 days a week.",
    "Limit added sugar and processed foods.",
    "Drink plenty of water.",
    "Avoid smoking and excessive alcohol.",
    "Get regular health screenings.",
    "Monitor your blood pressure and cholesterol.",
    "Eat more fiber-rich foods.",
    "Prioritize sleep (7–9 hours).",
    "Practice stress-reducing activities.",
    "Avoid skipping meals.",
    "Add more fruits and vegetables to your diet.",
    "Avoid prolonged sitting—take breaks.",
    "Cook at home more often than dining out.",
    "Track your progress using a health journal.",
];

pub fn recommendation(is_diabetic: bool) -> Markup {
    let tips = if is_diabetic {
        DIABETIC_TIPS
    } else {
        NON_DIABETIC_TIPS
    };

    html! {
        h1 { "Health Recommendations" }
        p { "Based on your result, here are some personalized tips:" }
        article style="max-width: 44rem;" {
            ul {
                @for tip in tips {
                    li { (tip) }
                }
            }
            p {
                a role="button" href="/" { "Back to Home" }
            }
        }
    }
}
