//! Gallery switcher and per-gallery image carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sidebar headers activate galleries; the carousel inside each gallery
//! steps through its images with wraparound and rebuilds its indicator dots
//! on every position change. All position bookkeeping lives in
//! `GalleryState` so the one-active-gallery/one-visible-image invariant is
//! enforced in one place.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::state::gallery::{Gallery, GalleryState};

fn indicator_class(index: usize, current: usize) -> &'static str {
    if index == current { "active" } else { "" }
}

fn image_display(index: usize, current: usize) -> &'static str {
    if index == current {
        "display:block"
    } else {
        "display:none"
    }
}

/// Sidebar of gallery headers plus one carousel per gallery. The first
/// gallery is activated on initial render when none is active yet.
#[component]
pub fn GallerySection(galleries: Vec<Gallery>) -> impl IntoView {
    let state = expect_context::<RwSignal<GalleryState>>();

    if let Some(first) = galleries.first() {
        if state.get_untracked().active_gallery().is_none() {
            let first_id = first.id.clone();
            state.update(|s| s.activate(&first_id));
        }
    }

    let headers = galleries
        .iter()
        .map(|gallery| {
            let highlight_id = gallery.id.clone();
            let activate_id = gallery.id.clone();
            let title = gallery.title.clone();
            view! {
                <h2
                    class="gallery-section__header"
                    class:active=move || state.get().is_active(&highlight_id)
                    on:click=move |_| state.update(|s| s.activate(&activate_id))
                >
                    {title}
                </h2>
            }
        })
        .collect::<Vec<_>>();

    let carousels = galleries
        .into_iter()
        .map(|gallery| view! { <Carousel gallery=gallery/> })
        .collect::<Vec<_>>();

    view! {
        <div class="gallery-section">
            <aside class="sidebar">{headers}</aside>
            <div class="gallery-section__carousels">{carousels}</div>
        </div>
    }
}

/// One gallery's carousel: images (one visible), prev/next controls, and
/// clickable position indicators.
#[component]
fn Carousel(gallery: Gallery) -> impl IntoView {
    let state = expect_context::<RwSignal<GalleryState>>();
    let count = gallery.images.len();
    let id = gallery.id.clone();

    let current = {
        let id = id.clone();
        move || state.get().current_index(&id)
    };

    let images = gallery
        .images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let current = current.clone();
            let alt = format!("{} {}", gallery.title, index + 1);
            view! {
                <img
                    class="carousel__image"
                    src=src.clone()
                    alt=alt
                    style=move || image_display(index, current())
                />
            }
        })
        .collect::<Vec<_>>();

    let indicators = {
        let id = id.clone();
        let current = current.clone();
        move || {
            let current_index = current();
            (0..count)
                .map(|index| {
                    let jump_id = id.clone();
                    view! {
                        <span
                            class=indicator_class(index, current_index)
                            on:click=move |_| state.update(|s| s.jump(&jump_id, index, count))
                        ></span>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    let active_id = id.clone();
    let prev_id = id.clone();
    let next_id = id.clone();

    view! {
        <div class="carousel" id=id.clone() class:active=move || state.get().is_active(&active_id)>
            <button
                class="carousel__control carousel__control--prev"
                on:click=move |_| state.update(|s| s.step(&prev_id, -1, count))
            >
                "‹"
            </button>
            <div class="carousel__frame">{images}</div>
            <button
                class="carousel__control carousel__control--next"
                on:click=move |_| state.update(|s| s.step(&next_id, 1, count))
            >
                "›"
            </button>
            <div class="indicator">{indicators}</div>
        </div>
    }
}
