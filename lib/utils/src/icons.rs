use leptos::prelude::*;

use crate::constants::LOGO_ICON_PATH;

#[component]
pub fn LogoIcon(#[prop(default = "h-7 w-7")] class: &'static str) -> impl IntoView {
    view! {
        <img src=LOGO_ICON_PATH class=class/>
    }
}

#[component]
pub fn CloseIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/cross.svg" class=class/>
    }
}

#[component]
pub fn CommentIcon(#[prop(default = "h-4 w-4")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/comment.svg" class=class/>
    }
}

#[component]
pub fn ClockIcon(#[prop(default = "h-4 w-4")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/clock.svg" class=class/>
    }
}

#[component]
pub fn SendIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/send.svg" class=class/>
    }
}

#[component]
pub fn LoadingIcon(#[prop(default = "h-6 w-6 animate-spin")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/loading.svg" class=class/>
    }
}

#[component]
pub fn ExternalLinkIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/external_link.svg" class=class/>
    }
}

#[component]
pub fn MailIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/mail.svg" class=class/>
    }
}

#[component]
pub fn GithubIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/github.svg" class=class/>
    }
}

#[component]
pub fn LinkedinIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/linkedin.svg" class=class/>
    }
}

#[component]
pub fn TwitterIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/twitter.svg" class=class/>
    }
}

#[component]
pub fn NetworkErrorIcon(#[prop(default = "h-20 w-20")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/network.svg" class=class/>
    }
}

#[component]
pub fn InternalErrorIcon(#[prop(default = "h-20 w-20")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/internal.svg" class=class/>
    }
}

#[component]
pub fn NotFoundIcon(#[prop(default = "h-20 w-20")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/not_found.svg" class=class/>
    }
}

#[component]
pub fn InvalidRequestIcon(#[prop(default = "h-20 w-20")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/invalid_request.svg" class=class/>
    }
}
