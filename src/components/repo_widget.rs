//! GitHub repository widget: title link, description, stars, and the
//! language-composition bar with its legend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget owns an independent fetch/render pipeline keyed by its
//! `(username, repo)` props. The shared color table arrives through context;
//! a widget waits for that one-shot load to settle before fetching, so color
//! resolution is always possible once rendering begins. One widget failing
//! renders its own error and leaves siblings untouched.

#[cfg(test)]
#[path = "repo_widget_test.rs"]
mod repo_widget_test;

use leptos::prelude::*;

use crate::net::github::RepoOverview;
use crate::state::colors::ColorTableState;
use crate::util::languages::{OTHER_LABEL, displayed_languages, share_label};

const ERROR_TITLE: &str = "Failed to load repository data";
const UNTITLED_REPO: &str = "Untitled repository";
const NO_DESCRIPTION: &str = "No description";

fn repo_title(name: &str) -> &str {
    if name.is_empty() { UNTITLED_REPO } else { name }
}

fn description_text(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => NO_DESCRIPTION.to_owned(),
    }
}

/// Inline style for one proportional bar segment.
fn segment_style(percentage: f64, color: &str) -> String {
    format!("width:{percentage}%;background-color:{color}")
}

/// Inline style for a legend color box.
fn color_box_style(color: &str) -> String {
    format!("background-color:{color}")
}

/// One repository widget. Fetches after the color table settles and renders
/// metadata plus the language bar/legend, or an error title and message.
#[component]
pub fn RepoWidget(username: String, repo: String) -> impl IntoView {
    let colors = expect_context::<RwSignal<ColorTableState>>();
    let overview = RwSignal::new(None::<RepoOverview>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let started = RwSignal::new(false);
        let username = username.clone();
        let repo = repo.clone();
        Effect::new(move || {
            if !colors.get().loaded {
                return;
            }
            if started.get_untracked() {
                return;
            }
            started.set(true);
            let username = username.clone();
            let repo = repo.clone();
            leptos::task::spawn_local(async move {
                match crate::net::github::fetch_repo_overview(&username, &repo).await {
                    Ok(data) => overview.set(Some(data)),
                    Err(e) => {
                        log::error!("repository widget {username}/{repo}: {e}");
                        error.set(Some(e));
                    }
                }
            });
        });
    }

    let title = move || {
        if error.get().is_some() {
            view! { <span>{ERROR_TITLE}</span> }.into_any()
        } else if let Some(data) = overview.get() {
            let href = data.metadata.html_url.clone();
            let label = repo_title(&data.metadata.name).to_owned();
            view! {
                <a href=href target="_blank" rel="noopener">
                    {label}
                </a>
            }
            .into_any()
        } else {
            view! { <span>"Loading..."</span> }.into_any()
        }
    };

    let description = move || {
        if let Some(message) = error.get() {
            message
        } else if let Some(data) = overview.get() {
            description_text(data.metadata.description.as_deref())
        } else {
            String::new()
        }
    };

    let stars = move || overview.get().map_or(0, |data| data.metadata.stargazers_count);

    let bar = move || {
        let Some(data) = overview.get() else {
            return Vec::new();
        };
        let display = displayed_languages(&data.languages.0);
        let state = colors.get();
        let mut segments: Vec<_> = display
            .shares
            .iter()
            .map(|share| {
                let style = segment_style(share.percentage, state.table.resolve(&share.name));
                view! { <div class="language-segment" style=style></div> }
            })
            .collect();
        if let Some(percentage) = display.other_percentage {
            let style = segment_style(percentage, state.table.fallback());
            segments.push(view! { <div class="language-segment" style=style></div> });
        }
        segments
    };

    let legend = move || {
        let Some(data) = overview.get() else {
            return Vec::new();
        };
        let display = displayed_languages(&data.languages.0);
        let state = colors.get();
        let mut rows: Vec<_> = display
            .shares
            .iter()
            .map(|share| {
                let box_style = color_box_style(state.table.resolve(&share.name));
                let label = share_label(&share.name, share.percentage);
                view! {
                    <div class="legend-item">
                        <span class="color-box" style=box_style></span>
                        <span>{label}</span>
                    </div>
                }
            })
            .collect();
        if let Some(percentage) = display.other_percentage {
            let box_style = color_box_style(state.table.fallback());
            let label = share_label(OTHER_LABEL, percentage);
            rows.push(view! {
                <div class="legend-item">
                    <span class="color-box" style=box_style></span>
                    <span>{label}</span>
                </div>
            });
        }
        rows
    };

    view! {
        <div class="github-widget" data-username=username data-repo=repo>
            <h2 class="github-widget__title">{title}</h2>
            <p class="github-widget__description">{description}</p>
            <div class="github-widget__stars">"★ " <span>{stars}</span></div>
            <div class="language-bar">{bar}</div>
            <div class="language-legend">{legend}</div>
        </div>
    }
}
