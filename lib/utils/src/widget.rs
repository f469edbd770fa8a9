use leptos::prelude::*;

use crate::errors::{AppError, ErrorDisplay};
use crate::icons::{CommentIcon, LoadingIcon};

/// Component that displays its children in a modal dialog
#[component]
pub fn ModalDialog(
    #[prop(default = "")]
    class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_class =
        move || format!("relative transform overflow-visible rounded-sm transition-all {class}");
    view! {
        <div
            class="relative z-20"
            aria-labelledby="modal-title"
            role="dialog"
            aria-modal="true"
        >
            <div class="fixed inset-0 bg-base-200/75 transition-opacity"></div>
            <div class="fixed inset-0 z-20 w-screen overflow-auto">
                <div class="flex min-h-full justify-center items-center">
                    <div class=dialog_class>
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }.into_any()
}

/// Component to display the number of comments of an article
#[component]
pub fn CommentCountWidget(
    count: i32,
) -> impl IntoView {
    view! {
        <div class="flex gap-1.5 items-center text-sm px-1">
            <CommentIcon/>
            {count}
        </div>
    }.into_any()
}

/// Component to display an article tag
#[component]
pub fn TagChip(
    label: &'static str,
) -> impl IntoView {
    view! {
        <span class="px-2 py-0.5 rounded-full bg-base-200 text-xs">{label}</span>
    }
}

/// Circle showing the first letter of an author's name
#[component]
pub fn AuthorAvatar(
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let initial = name
        .chars()
        .next()
        .map(|letter| letter.to_uppercase().to_string())
        .unwrap_or_default();
    view! {
        <div class="w-10 h-10 shrink-0 rounded-full bg-primary/20 flex items-center justify-center font-semibold text-primary">
            {initial}
        </div>
    }.into_any()
}

/// Component to display a loading indicator or error depending on the input signals
#[component]
pub fn LoadIndicators(
    #[prop(into)]
    is_loading: Signal<bool>,
    #[prop(into)]
    load_error: Signal<Option<AppError>>,
) -> impl IntoView {
    view! {
        <Show when=move || load_error.read().is_some()>
        {
            let error = load_error.get_untracked().unwrap();
            view! {
                <div class="flex justify-start py-4"><ErrorDisplay error/></div>
            }
        }
        </Show>
        <div class="w-full min-h-6">
            <Show when=move || is_loading.get()>
                <LoadingIcon/>
            </Show>
        </div>
    }
}
