//! Gallery activation and per-gallery carousel position state.
//!
//! DESIGN
//! ======
//! One state struct owns both concerns so the invariant — at most one active
//! gallery, at most one visible image inside it — has a single enforcement
//! point instead of scattered DOM toggles.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashMap;

/// Static description of one gallery: a stable id, a sidebar title, and the
/// image sources it cycles through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    pub id: String,
    pub title: String,
    pub images: Vec<String>,
}

/// Which gallery is active and which image each gallery currently shows.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    active: Option<String>,
    indices: HashMap<String, usize>,
}

impl GalleryState {
    /// Make `id` the single active gallery and reset its position to the
    /// first image, regardless of where it was before.
    pub fn activate(&mut self, id: &str) {
        self.active = Some(id.to_owned());
        self.indices.insert(id.to_owned(), 0);
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active_gallery(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Current image index for `id`; galleries start at 0.
    pub fn current_index(&self, id: &str) -> usize {
        self.indices.get(id).copied().unwrap_or(0)
    }

    /// Step the gallery by `direction` (+1 or -1), wrapping modulo
    /// `image_count` in both directions. Empty galleries stay at 0.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn step(&mut self, id: &str, direction: i32, image_count: usize) {
        if image_count == 0 {
            return;
        }
        let count = image_count as i64;
        let current = self.current_index(id) as i64;
        let next = (current + i64::from(direction) + count).rem_euclid(count);
        self.indices.insert(id.to_owned(), next as usize);
    }

    /// Jump straight to `index` (indicator click). Out-of-range indices are
    /// clamped into the gallery.
    pub fn jump(&mut self, id: &str, index: usize, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.indices.insert(id.to_owned(), index.min(image_count - 1));
    }
}
