use gloo_console::log;
use log::warn;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::scroll_fade::{section_fade, section_progress};
use crate::survey::questions::{bonestack_pages, QuestionId, QuestionKind};
use crate::survey::state::{AnswerSheet, Survey};
use crate::Route;

/// Wire format of a finalized survey, using the field names the product's
/// analysis tooling expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    primary_goal: String,
    secondary_goals: Vec<String>,
    age_group: String,
    time_commitment: String,
    advanced_comfort: String,
    budget: String,
    applications: String,
    health_notes: Vec<String>,
}

impl SurveySubmission {
    pub fn from_answers(answers: &AnswerSheet) -> Self {
        let single = |id: QuestionId| answers.single(id).unwrap_or_default().to_string();
        let multi = |id: QuestionId| {
            answers
                .multi(id)
                .map(|values| values.iter().cloned().collect())
                .unwrap_or_default()
        };
        Self {
            primary_goal: single(QuestionId::PrimaryGoal),
            secondary_goals: multi(QuestionId::SecondaryGoals),
            age_group: single(QuestionId::AgeGroup),
            time_commitment: single(QuestionId::TimeCommitment),
            advanced_comfort: single(QuestionId::AdvancedComfort),
            budget: single(QuestionId::Budget),
            applications: single(QuestionId::Applications),
            health_notes: multi(QuestionId::HealthNotes),
        }
    }
}

/// Hands the finalized answers to the outside world. The site has no
/// backend; the record goes to the browser console.
fn deliver(submission: &SurveySubmission) {
    match serde_json::to_string(submission) {
        Ok(payload) => log!("Survey submitted:", payload),
        Err(err) => warn!("failed to encode submission: {err}"),
    }
}

fn compute_section_fades(window: &web_sys::Window, refs: &[NodeRef]) -> Vec<f64> {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    refs.iter()
        .map(|node| {
            node.cast::<web_sys::Element>()
                .map(|element| {
                    let rect = element.get_bounding_client_rect();
                    section_fade(section_progress(rect.top(), rect.height(), viewport), 0)
                })
                .unwrap_or(0.0)
        })
        .collect()
}

#[function_component(SurveyPage)]
pub fn survey_page() -> Html {
    let survey = use_state(|| Survey::new(bonestack_pages()));
    let submitted = use_state(|| false);
    let page_count = survey.page_count();
    let section_refs = use_state(|| {
        (0..page_count)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let fades = use_state(|| {
        (0..page_count)
            .map(|index| if index == 0 { 1.0 } else { 0.0 })
            .collect::<Vec<f64>>()
    });

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let fades = fades.clone();
        let section_refs = section_refs.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    let fades = fades.clone();
                    let section_refs = section_refs.clone();
                    move || {
                        fades.set(compute_section_fades(&window, &section_refs));
                    }
                });
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                // Initial check
                fades.set(compute_section_fades(&window, &section_refs));
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_select = {
        let survey = survey.clone();
        Callback::from(move |(page_index, value): (usize, &'static str)| {
            let mut next = (*survey).clone();
            match next.select_single(page_index, value) {
                Ok(()) => survey.set(next),
                Err(err) => warn!("selection rejected: {err}"),
            }
        })
    };

    let on_toggle = {
        let survey = survey.clone();
        Callback::from(move |(page_index, value, checked): (usize, &'static str, bool)| {
            let mut next = (*survey).clone();
            match next.toggle_multiple(page_index, value, checked) {
                Ok(()) => survey.set(next),
                Err(err) => warn!("toggle rejected: {err}"),
            }
        })
    };

    let go_to_page = {
        let survey = survey.clone();
        let section_refs = section_refs.clone();
        Callback::from(move |target: usize| {
            let mut next = (*survey).clone();
            match next.go_to(target) {
                Ok(()) => {
                    survey.set(next);
                    if let Some(element) = section_refs
                        .get(target)
                        .and_then(|node| node.cast::<web_sys::Element>())
                    {
                        element.scroll_into_view();
                    }
                }
                Err(err) => warn!("navigation rejected: {err}"),
            }
        })
    };

    let on_submit = {
        let survey = survey.clone();
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*survey).clone();
            let last = next.page_count() - 1;
            if let Err(err) = next.go_to(last) {
                warn!("navigation rejected: {err}");
                return;
            }
            match next.submit() {
                Ok(answers) => {
                    deliver(&SurveySubmission::from_answers(&answers));
                    survey.set(next);
                    submitted.set(true);
                }
                Err(err) => warn!("submit rejected: {err}"),
            }
        })
    };

    if *submitted {
        return html! {
            <div class="survey-page">
                <div class="survey-done">
                    <div class="done-mark">{"💀"}</div>
                    <h2>{"Thank you!"}</h2>
                    <p>{"Your answers are in. We'll use them to shape your personalized stack."}</p>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        <button class="survey-button primary">{"Back to home"}</button>
                    </Link<Route>>
                </div>
                { survey_styles() }
            </div>
        };
    }

    let current = survey.current_page();
    let question_number = survey.logical_question_number(current);
    let question_total = survey.total_logical_questions();
    let progress_percent = survey.progress_fraction(current) * 100.0;

    html! {
        <div class="survey-page">
            <div class="survey-header">
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style={format!("width: {progress_percent:.1}%;")}
                    ></div>
                </div>
                <div class="header-content">
                    <span class="header-brand">{"💀 BoneStack Survey"}</span>
                    <span class="header-count">
                        { format!("Question {question_number} of {question_total}") }
                    </span>
                </div>
            </div>
            <div class="header-spacer"></div>

            {
                for survey.pages().iter().enumerate().map(|(index, page)| {
                    let fade = fades.get(index).copied().unwrap_or(0.0);
                    let last_page = index + 1 == page_count;
                    let answered = survey.can_advance(index);

                    let options = page.options.iter().map(|option| {
                        let description = option.description.map(|text| html! {
                            <p class="option-description">{ text }</p>
                        });
                        match page.kind {
                            QuestionKind::SingleChoice => {
                                let onclick = {
                                    let on_select = on_select.clone();
                                    let value = option.value;
                                    Callback::from(move |_: MouseEvent| on_select.emit((index, value)))
                                };
                                html! {
                                    <label class="option-card" {onclick}>
                                        <input
                                            type="radio"
                                            name={page.id.as_str()}
                                            checked={survey.answers().single(page.id) == Some(option.value)}
                                        />
                                        <div class="option-text">
                                            <span class="option-label">{ option.label }</span>
                                            { description }
                                        </div>
                                    </label>
                                }
                            }
                            QuestionKind::MultiChoice => {
                                let onchange = {
                                    let on_toggle = on_toggle.clone();
                                    let value = option.value;
                                    Callback::from(move |e: Event| {
                                        if let Some(input) = e
                                            .target()
                                            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                                        {
                                            on_toggle.emit((index, value, input.checked()));
                                        }
                                    })
                                };
                                html! {
                                    <label class="option-card">
                                        <input
                                            type="checkbox"
                                            checked={survey.answers().contains(page.id, option.value)}
                                            {onchange}
                                        />
                                        <div class="option-text">
                                            <span class="option-label">{ option.label }</span>
                                            { description }
                                        </div>
                                    </label>
                                }
                            }
                        }
                    }).collect::<Html>();

                    let previous_button = (index > 0).then(|| {
                        let go_to_page = go_to_page.clone();
                        html! {
                            <button
                                class="survey-button"
                                onclick={Callback::from(move |_: MouseEvent| go_to_page.emit(index - 1))}
                            >
                                {"← Previous"}
                            </button>
                        }
                    });
                    let forward_button = if last_page {
                        let on_submit = on_submit.clone();
                        html! {
                            <button
                                class="survey-button primary"
                                disabled={!answered}
                                onclick={on_submit}
                            >
                                {"Submit Survey"}
                            </button>
                        }
                    } else {
                        let go_to_page = go_to_page.clone();
                        html! {
                            <button
                                class="survey-button primary"
                                disabled={!answered}
                                onclick={Callback::from(move |_: MouseEvent| go_to_page.emit(index + 1))}
                            >
                                {"Next →"}
                            </button>
                        }
                    };

                    html! {
                        <section
                            key={index}
                            ref={section_refs[index].clone()}
                            class="question-section"
                        >
                            <div class="question-inner" style={format!("opacity: {fade:.3};")}>
                                <div class="question-head">
                                    {
                                        page.icon.map(|icon| html! {
                                            <div class="question-icon">{ icon }</div>
                                        })
                                    }
                                    <h2>
                                        { page.title }
                                        {
                                            page.continuation.then(|| html! {
                                                <span class="continued">{" (continued)"}</span>
                                            })
                                        }
                                    </h2>
                                    {
                                        page.subtitle.map(|subtitle| html! {
                                            <p class="question-subtitle">{ subtitle }</p>
                                        })
                                    }
                                </div>
                                <div class="option-list">
                                    { options }
                                </div>
                                <div class="question-nav">
                                    { previous_button.unwrap_or_else(|| html! { <div></div> }) }
                                    { forward_button }
                                </div>
                            </div>
                        </section>
                    }
                })
            }
            { survey_styles() }
        </div>
    }
}

fn survey_styles() -> Html {
    html! {
        <style>
            {r#"
.survey-page {
    background: #ffffff;
    color: #000000;
    min-height: 100vh;
}

.survey-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: #ffffff;
    border-bottom: 1px solid #f3f3f3;
}

.progress-track {
    height: 4px;
    background: #f3f4f6;
}

.progress-fill {
    height: 100%;
    background: #000;
    transition: width 0.5s ease;
}

.header-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.header-brand {
    font-weight: 500;
}

.header-count {
    font-size: 0.875rem;
    color: #4b5563;
}

.header-spacer {
    height: 5rem;
}

.question-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 5rem 0;
}

.question-inner {
    width: 100%;
    max-width: 760px;
    padding: 0 1.5rem;
}

.question-head {
    text-align: center;
    margin-bottom: 3rem;
}

.question-icon {
    width: 3rem;
    height: 3rem;
    margin: 0 auto 1.5rem;
    background: #f9fafb;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
}

.question-head h2 {
    font-size: 2.25rem;
    font-weight: 300;
    margin: 0 0 0.5rem;
}

.continued {
    font-size: 1.25rem;
    color: #9ca3af;
}

.question-subtitle {
    color: #4b5563;
    margin: 0;
}

.option-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.option-card {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1.5rem;
    border: 1px solid #e5e7eb;
    border-radius: 1rem;
    cursor: pointer;
    transition: box-shadow 0.2s ease;
}

.option-card:hover {
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
}

.option-card input {
    margin-top: 0.25rem;
    accent-color: #000;
    cursor: pointer;
}

.option-text {
    flex: 1;
}

.option-label {
    font-weight: 500;
}

.option-description {
    color: #4b5563;
    font-size: 0.875rem;
    margin: 0.25rem 0 0;
}

.question-nav {
    display: flex;
    justify-content: space-between;
    margin-top: 3rem;
}

.survey-button {
    background: #fff;
    color: #000;
    border: 1px solid #e5e7eb;
    border-radius: 9999px;
    padding: 0.75rem 1.5rem;
    font-size: 1rem;
    cursor: pointer;
    transition: background 0.2s ease;
}

.survey-button:hover {
    background: #f9fafb;
}

.survey-button.primary {
    background: #000;
    color: #fff;
    border: none;
    padding: 0.75rem 2rem;
}

.survey-button.primary:hover {
    background: #1f2937;
}

.survey-button.primary:disabled {
    background: #d1d5db;
    cursor: not-allowed;
}

.survey-done {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 1.5rem;
}

.done-mark {
    font-size: 4rem;
    margin-bottom: 1.5rem;
}

.survey-done h2 {
    font-size: 2.5rem;
    font-weight: 300;
    margin: 0 0 1rem;
}

.survey-done p {
    color: #4b5563;
    margin: 0 0 2.5rem;
}

.forward-link {
    text-decoration: none;
}

@media (max-width: 768px) {
    .question-head h2 {
        font-size: 1.75rem;
    }

    .option-card {
        padding: 1rem;
    }
}
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::questions::bonestack_pages;
    use crate::survey::state::Survey;

    #[test]
    fn submission_uses_the_original_field_names() {
        let mut survey = Survey::new(bonestack_pages());
        survey.select_single(0, "growth").unwrap();
        survey.toggle_multiple(1, "height", true).unwrap();
        survey.toggle_multiple(2, "posture", true).unwrap();
        survey.select_single(3, "18-25").unwrap();
        survey.go_to(survey.page_count() - 1).unwrap();

        let submission = SurveySubmission::from_answers(&survey.submit().unwrap());
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["primaryGoal"], "growth");
        assert_eq!(json["secondaryGoals"], serde_json::json!(["height", "posture"]));
        assert_eq!(json["ageGroup"], "18-25");
        assert_eq!(json["timeCommitment"], "");
        assert_eq!(json["healthNotes"], serde_json::json!([]));
    }

    #[test]
    fn unanswered_questions_submit_as_empty() {
        let mut survey = Survey::new(bonestack_pages());
        survey.go_to(survey.page_count() - 1).unwrap();
        let submission = SurveySubmission::from_answers(&survey.submit().unwrap());
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["primaryGoal"], "");
        assert_eq!(json["secondaryGoals"], serde_json::json!([]));
    }
}
