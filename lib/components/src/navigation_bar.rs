use leptos::prelude::*;
use strum::IntoEnumIterator;

use inkline_core::state::{GlobalState, Section};
use inkline_utils::constants::SITE_NAME;
use inkline_utils::icons::LogoIcon;
use inkline_utils::node_utils::scroll_into_view_smooth;

/// Records the clicked section as active and scrolls it into view. The
/// highlight follows the last click, not the scroll position.
fn scroll_to_section(state: &GlobalState, section: Section) {
    state.active_section.set(section);
    if !scroll_into_view_smooth(section.anchor()) {
        log::warn!("No element found for section anchor: {}", section.anchor());
    }
}

/// Navigation bar component
#[component]
pub fn NavigationBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 z-10 w-full bg-base-100/80 backdrop-blur-md border-b border-base-200">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex gap-1.5 items-center">
                    <LogoIcon/>
                    <h1 class="text-2xl font-bold tracking-tight">{SITE_NAME}</h1>
                </a>
                <div class="flex gap-4 2xl:gap-8">
                    <For
                        each=move || Section::iter()
                        key=|section| *section
                        let(section)
                    >
                        <SectionLink section/>
                    </For>
                </div>
            </div>
        </nav>
    }.into_any()
}

#[component]
fn SectionLink(section: Section) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let link_class = move || match state.active_section.get() == section {
        true => "text-sm font-medium transition-colors text-primary",
        false => "text-sm font-medium transition-colors opacity-70 hover:text-primary",
    };

    view! {
        <button
            class=link_class
            on:click=move |_| scroll_to_section(&state, section)
        >
            {section.label()}
        </button>
    }.into_any()
}
