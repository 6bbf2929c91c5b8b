//! Standalone question page: a prompt and a row of choice buttons driven by
//! URL query parameters.
//!
//! DESIGN
//! ======
//! `?question=...&choices=a,b,c` configures the page; both fall back to a
//! built-in default poll. A choice whose label starts with a space is
//! "evasive": the button relocates to a random viewport position whenever
//! the pointer reaches it.

#[cfg(test)]
#[path = "question_test.rs"]
mod question_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

pub const DEFAULT_QUESTION: &str = "What is your favorite color?";

fn default_choices() -> Vec<String> {
    ["Red", "Green", "Blue", " Black "]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Split the comma-separated `choices` parameter. Labels are kept verbatim
/// (leading spaces mark evasive choices), empty labels are dropped.
fn split_choices(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|choice| !choice.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// CSS class list for a choice button; yes/no answers get color modifiers.
fn choice_button_class(choice: &str) -> String {
    match choice.trim() {
        "Yes" => "choice-button green".to_owned(),
        "No" => "choice-button red".to_owned(),
        _ => "choice-button".to_owned(),
    }
}

/// A choice is evasive when its label carries a leading space.
fn is_evasive(choice: &str) -> bool {
    choice.starts_with(' ')
}

/// Question page.
#[component]
pub fn QuestionPage() -> impl IntoView {
    let query = use_query_map();

    let question = move || {
        query
            .read()
            .get("question")
            .filter(|q| !q.is_empty())
            .unwrap_or_else(|| DEFAULT_QUESTION.to_owned())
    };

    let choices = move || {
        query
            .read()
            .get("choices")
            .map(|raw| split_choices(&raw))
            .filter(|choices| !choices.is_empty())
            .unwrap_or_else(default_choices)
    };

    view! {
        <div class="question-page">
            <h1 class="question-page__title">{question}</h1>
            <div class="question-page__choices">
                {move || {
                    choices()
                        .into_iter()
                        .map(|choice| view! { <ChoiceButton choice=choice/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// One choice button; evasive buttons dodge the pointer.
#[component]
fn ChoiceButton(choice: String) -> impl IntoView {
    let class = choice_button_class(&choice);
    let evasive = is_evasive(&choice);
    let node_ref = NodeRef::<leptos::html::Button>::new();

    let dodge = move || {
        if !evasive {
            return;
        }
        #[cfg(feature = "csr")]
        if let Some(button) = node_ref.get() {
            move_to_random_position(&button);
        }
    };

    view! {
        <button
            class=class
            node_ref=node_ref
            data-choice=choice.clone()
            on:mouseenter=move |_| dodge()
            on:touchstart=move |_| dodge()
        >
            {choice.clone()}
        </button>
    }
}

/// Relocate `element` to a random absolute position inside the viewport.
#[cfg(feature = "csr")]
fn move_to_random_position(element: &web_sys::HtmlElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let viewport_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let viewport_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let max_x = (viewport_w - f64::from(element.offset_width())).max(0.0);
    let max_y = (viewport_h - f64::from(element.offset_height())).max(0.0);
    let x = js_sys::Math::random() * max_x;
    let y = js_sys::Math::random() * max_y;

    let style = element.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
}
