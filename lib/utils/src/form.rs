use leptos::prelude::*;

/// Component for a single-line text input bound to a signal
#[component]
pub fn FormTextInput(
    /// Name of the input in the form that contains this component
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "input w-full")]
    class: &'static str,
    maxlength: usize,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            name=name
            class=class
            placeholder=placeholder
            maxlength=maxlength.to_string()
            prop:value=value
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Component for a multi-line text input bound to a signal
#[component]
pub fn FormTextarea(
    /// Name of the input in the form that contains this component
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)]
    rows: usize,
    #[prop(default = "textarea w-full")]
    class: &'static str,
    maxlength: usize,
) -> impl IntoView {
    view! {
        <textarea
            name=name
            class=class
            placeholder=placeholder
            rows=rows.to_string()
            maxlength=maxlength.to_string()
            prop:value=value
            on:input=move |ev| value.set(event_target_value(&ev))
        >
            {value.get_untracked()}
        </textarea>
    }
}
