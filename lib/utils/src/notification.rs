use const_format::concatcp;
use leptos::prelude::*;

use crate::icons::CloseIcon;

const ALERT_BASE_CLASS: &str = "alert shadow-sm flex items-start gap-2";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// Transient notification with a short title and description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl ToString, description: impl ToString) -> Self {
        Toast {
            level: ToastLevel::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(title: impl ToString, description: impl ToString) -> Self {
        Toast {
            level: ToastLevel::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn alert_class(&self) -> &'static str {
        match self.level {
            ToastLevel::Success => concatcp!(ALERT_BASE_CLASS, " alert-success"),
            ToastLevel::Error => concatcp!(ALERT_BASE_CLASS, " alert-error"),
        }
    }
}

/// Overlay rendering the currently displayed toast, if any. Re-renders when
/// one toast replaces another while the overlay is visible.
#[component]
pub fn ToastHost(
    #[prop(into)]
    toast: Signal<Option<Toast>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        { move || toast.get().map(|toast| {
            let alert_class = toast.alert_class();
            view! {
                <div class="toast toast-center z-30">
                    <div class=alert_class>
                        <div class="flex flex-col text-left">
                            <span class="font-semibold">{toast.title.clone()}</span>
                            <span class="text-sm">{toast.description.clone()}</span>
                        </div>
                        <button
                            type="button"
                            class="button-rounded-ghost"
                            aria-label="Dismiss notification"
                            on:click=move |_| on_dismiss.run(())
                        >
                            <CloseIcon class="h-4 w-4"/>
                        </button>
                    </div>
                </div>
            }
        })}
    }.into_any()
}

#[cfg(test)]
mod tests {
    use crate::notification::{Toast, ToastLevel};

    #[test]
    fn test_toast_constructors() {
        let success = Toast::success("Done!", "Your comment was added");
        assert_eq!(success.level, ToastLevel::Success);
        assert_eq!(success.title, "Done!");
        assert_eq!(success.description, "Your comment was added");

        let error = Toast::error("Error", "Could not load comments");
        assert_eq!(error.level, ToastLevel::Error);
    }

    #[test]
    fn test_toast_alert_class() {
        assert!(Toast::success("a", "b").alert_class().ends_with("alert-success"));
        assert!(Toast::error("a", "b").alert_class().ends_with("alert-error"));
        assert!(Toast::error("a", "b").alert_class().starts_with("alert "));
    }
}
