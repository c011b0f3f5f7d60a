//! Symptom checker page: free-text symptoms plus optional demographics,
//! analyzed by the backend.

#[cfg(test)]
#[path = "symptom_checker_test.rs"]
mod symptom_checker_test;

use leptos::prelude::*;

use crate::net::types::{SymptomCheckRequest, SymptomCheckResponse};

fn severity_class(severity: &str) -> &'static str {
    match severity {
        "low" => "severity-badge severity-badge--low",
        "high" => "severity-badge severity-badge--high",
        _ => "severity-badge severity-badge--medium",
    }
}

fn severity_icon(severity: &str) -> &'static str {
    match severity {
        "low" => "✓",
        "high" => "⚠",
        _ => "ℹ",
    }
}

/// Optional age field: anything that doesn't parse is treated as absent.
fn parse_age(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Canned result shown when the backend can't be reached, so the page
/// still renders a useful answer.
fn fallback_result() -> SymptomCheckResponse {
    SymptomCheckResponse {
        possible_conditions: vec![
            "Unable to analyze symptoms. Please ensure the backend is running.".to_owned(),
        ],
        recommendations: "Please try again later or consult a healthcare professional.".to_owned(),
        severity: "medium".to_owned(),
    }
}

fn build_request(symptoms: &str, age: &str, gender: &str) -> SymptomCheckRequest {
    SymptomCheckRequest {
        symptoms: symptoms.to_owned(),
        age: parse_age(age),
        gender: if gender.is_empty() { None } else { Some(gender.to_owned()) },
    }
}

/// Symptom checker page.
#[component]
pub fn SymptomCheckerPage() -> impl IntoView {
    let symptoms = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let result = RwSignal::new(None::<SymptomCheckResponse>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        result.set(None);
        let request = build_request(&symptoms.get(), &age.get(), &gender.get());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::check_symptoms(&request).await {
                Ok(analysis) => result.set(Some(analysis)),
                Err(_) => result.set(Some(fallback_result())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="symptom-checker">
            <nav class="symptom-checker__nav">
                <a href="/" class="symptom-checker__brand">"Symptom Checker"</a>
                <a href="/" class="symptom-checker__back">"← Back to Home"</a>
            </nav>

            <main class="symptom-checker__main">
                <h1>"AI Symptom Checker"</h1>
                <p class="symptom-checker__subtitle">
                    "Describe your symptoms and get AI-powered insights about possible "
                    "conditions and recommendations."
                </p>

                <form class="symptom-checker__form" on:submit=on_submit>
                    <label class="symptom-checker__label">
                        "Describe Your Symptoms *"
                        <textarea
                            class="symptom-checker__input"
                            required=true
                            rows="4"
                            placeholder="e.g. headache, fever, and a sore throat for two days"
                            prop:value=move || symptoms.get()
                            on:input=move |ev| symptoms.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="symptom-checker__label">
                        "Age"
                        <input
                            class="symptom-checker__input"
                            type="number"
                            min="0"
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="symptom-checker__label">
                        "Gender"
                        <select
                            class="symptom-checker__input"
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                        >
                            <option value="">"Prefer not to say"</option>
                            <option value="female">"Female"</option>
                            <option value="male">"Male"</option>
                            <option value="other">"Other"</option>
                        </select>
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Analyzing..." } else { "Analyze Symptoms" }}
                    </button>
                </form>

                <Show when=move || result.get().is_some()>
                    {move || {
                        let analysis = result.get().unwrap_or_else(fallback_result);
                        let severity = analysis.severity.clone();
                        view! {
                            <div class="symptom-checker__result">
                                <span class=severity_class(&severity)>
                                    {severity_icon(&severity)} " " {severity.clone()}
                                </span>
                                <h2>"Possible conditions"</h2>
                                <ul>
                                    {analysis
                                        .possible_conditions
                                        .iter()
                                        .map(|condition| view! { <li>{condition.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <h2>"Recommendations"</h2>
                                <p>{analysis.recommendations.clone()}</p>
                                <p class="symptom-checker__disclaimer">
                                    "This tool does not provide a medical diagnosis. "
                                    "Always consult a healthcare professional."
                                </p>
                            </div>
                        }
                    }}
                </Show>
            </main>
        </div>
    }
}
