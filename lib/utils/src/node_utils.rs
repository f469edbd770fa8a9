use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smoothly scrolls the element with the given id into view. Returns false
/// when no such element exists in the document.
pub fn scroll_into_view_smooth(element_id: &str) -> bool {
    match document().get_element_by_id(element_id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}
