use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use inkline_core::comment::{get_article_comments, validate_comment_fields, Comment, SubmitComment};
use inkline_core::state::GlobalState;
use inkline_utils::constants::{MAX_AUTHOR_EMAIL_LENGTH, MAX_AUTHOR_NAME_LENGTH, MAX_COMMENT_LENGTH};
use inkline_utils::errors::AppError;
use inkline_utils::form::{FormTextInput, FormTextarea};
use inkline_utils::icons::CloseIcon;
use inkline_utils::notification::Toast;
use inkline_utils::unpack::handle_initial_load;
use inkline_utils::widget::{AuthorAvatar, LoadIndicators, ModalDialog};

/// Modal presenting and mutating the comment list of one article. Loads on
/// mount and after every successful submission; closing invokes the caller's
/// callback. Loads run inside the modal's reactive owner, so a response
/// arriving after close is dropped.
#[component]
pub fn CommentsModal(
    article_id: i64,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let comment_vec = RwSignal::new(Vec::<Comment>::new());
    let load_error = RwSignal::new(None::<AppError>);
    let is_loading = RwSignal::new(false);
    let reload_count = RwSignal::new(0usize);

    let _comments_resource = LocalResource::new(
        move || async move {
            reload_count.track();
            is_loading.set(true);
            let initial_load = get_article_comments(article_id).await;
            if let Err(e) = &initial_load {
                state.push_toast(Toast::error("Comments unavailable", e.user_message()));
            }
            handle_initial_load(initial_load, comment_vec, load_error);
            is_loading.set(false);
        }
    );

    view! {
        <ModalDialog class="w-full flex justify-center p-4">
            <div class="bg-base-100 shadow-xl rounded-sm flex flex-col gap-6 w-full max-w-2xl max-h-[80vh] overflow-y-auto p-6">
                <div class="flex items-center justify-between">
                    <h3 id="modal-title" class="text-2xl font-semibold">"Comments"</h3>
                    <button
                        type="button"
                        class="button-rounded-ghost"
                        aria-label="Close comments"
                        on:click=move |_| on_close.run(())
                    >
                        <CloseIcon/>
                    </button>
                </div>
                <CommentForm article_id reload_count/>
                <CommentList comment_vec is_loading load_error/>
            </div>
        </ModalDialog>
    }.into_any()
}

/// Form to submit a new comment
#[component]
pub fn CommentForm(
    article_id: i64,
    /// bumped after every successful submission to trigger a reload
    reload_count: RwSignal<usize>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let author_name = RwSignal::new(String::new());
    let author_email = RwSignal::new(String::new());
    let comment_text = RwSignal::new(String::new());

    let submit_action = ServerAction::<SubmitComment>::new();
    let is_submitting = submit_action.pending();

    Effect::new(move |_| match submit_action.value().get() {
        Some(Ok(())) => {
            state.push_toast(Toast::success("Thank you!", "Your comment was added."));
            author_name.set(String::new());
            author_email.set(String::new());
            comment_text.set(String::new());
            reload_count.update(|count| *count += 1);
        }
        Some(Err(e)) => state.push_toast(Toast::error("Could not add comment", e.user_message())),
        None => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = author_name.get_untracked();
        let email = author_email.get_untracked();
        let text = comment_text.get_untracked();
        if let Err(e) = validate_comment_fields(&name, &email, &text) {
            state.push_toast(Toast::error("Missing fields", e.user_message()));
            return;
        }
        submit_action.dispatch(SubmitComment {
            article_id,
            author_name: name,
            author_email: email,
            comment_text: text,
        });
    };

    view! {
        <form class="flex flex-col gap-3 pb-6 border-b border-base-200" on:submit=on_submit>
            <FormTextInput
                name="author_name"
                placeholder="Your name"
                value=author_name
                maxlength=MAX_AUTHOR_NAME_LENGTH
            />
            <FormTextInput
                name="author_email"
                input_type="email"
                placeholder="Email"
                value=author_email
                maxlength=MAX_AUTHOR_EMAIL_LENGTH
            />
            <FormTextarea
                name="comment_text"
                placeholder="Your comment"
                value=comment_text
                maxlength=MAX_COMMENT_LENGTH
            />
            <button
                type="submit"
                class="button-secondary w-full"
                disabled=is_submitting
            >
                {move || match is_submitting.get() {
                    true => "Sending...",
                    false => "Post comment",
                }}
            </button>
        </form>
    }.into_any()
}

/// List of the loaded comments with count and empty state
#[component]
pub fn CommentList(
    comment_vec: RwSignal<Vec<Comment>>,
    is_loading: RwSignal<bool>,
    load_error: RwSignal<Option<AppError>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4">
            <h4 class="font-semibold text-lg">
                {move || format!("Comments ({})", comment_vec.read().len())}
            </h4>
            <Show when=move || comment_vec.read().is_empty() && !is_loading.get() && load_error.read().is_none()>
                <p class="text-center py-8 opacity-70">"No comments yet. Be the first!"</p>
            </Show>
            <ul class="flex flex-col gap-4">
                <For
                    each=move || comment_vec.get().into_iter()
                    key=|comment| comment.id
                    let(comment)
                >
                    <CommentEntry comment/>
                </For>
            </ul>
            <LoadIndicators is_loading load_error/>
        </div>
    }.into_any()
}

#[component]
fn CommentEntry(comment: Comment) -> impl IntoView {
    let formatted_date = comment.formatted_date();

    view! {
        <li class="rounded-sm bg-base-200/50 p-4">
            <div class="flex items-start gap-3">
                <AuthorAvatar name=comment.author_name.clone()/>
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-1">
                        <span class="font-semibold">{comment.author_name.clone()}</span>
                        <span class="text-xs opacity-70">{formatted_date}</span>
                    </div>
                    <p class="text-sm leading-relaxed whitespace-pre-wrap">{comment.comment_text.clone()}</p>
                </div>
            </div>
        </li>
    }.into_any()
}
