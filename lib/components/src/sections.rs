use leptos::prelude::*;

use inkline_core::content::SiteContent;
use inkline_core::state::Section;
use inkline_utils::constants::{MAX_AUTHOR_EMAIL_LENGTH, MAX_AUTHOR_NAME_LENGTH, MAX_CONTACT_MESSAGE_LENGTH, SITE_NAME};
use inkline_utils::icons::{ExternalLinkIcon, GithubIcon, LinkedinIcon, MailIcon, SendIcon, TwitterIcon};

/// Hero section
#[component]
pub fn HomeSection() -> impl IntoView {
    view! {
        <section id=Section::Home.anchor() class="pt-32 pb-20 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-6xl font-bold mb-6 tracking-tight">
                    "Design, ideas and inspiration"
                </h2>
                <p class="text-xl opacity-70 max-w-2xl mx-auto leading-relaxed">
                    "Exploring minimalism, typography and space. Sharing thoughts on design and development."
                </p>
            </div>
        </section>
    }.into_any()
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <h3 class="text-4xl font-bold mb-8 tracking-tight">"About me"</h3>
                <p class="text-lg opacity-70 leading-relaxed mb-6">
                    "Hi! I'm a designer and developer with a focus on minimalist solutions. \
                    I believe the best design is the one you don't notice, yet it makes life simpler."
                </p>
                <p class="text-lg opacity-70 leading-relaxed mb-6">
                    "I work with brands and startups, helping build products people love to use. \
                    In my spare time I study typography and experiment with new technologies."
                </p>
                <div class="flex gap-4 mt-8">
                    <a href="https://github.com" class="button-neutral flex items-center gap-2">
                        <GithubIcon/>
                        "GitHub"
                    </a>
                    <a href="https://linkedin.com" class="button-neutral flex items-center gap-2">
                        <LinkedinIcon/>
                        "LinkedIn"
                    </a>
                    <a href="https://twitter.com" class="button-neutral flex items-center gap-2">
                        <TwitterIcon/>
                        "Twitter"
                    </a>
                </div>
            </div>
        </section>
    }.into_any()
}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <section id=Section::Portfolio.anchor() class="py-20 px-6 bg-base-200/30">
            <div class="max-w-6xl mx-auto">
                <h3 class="text-4xl font-bold mb-12 tracking-tight">"Portfolio"</h3>
                <div class="grid md:grid-cols-3 gap-8">
                {
                    content.portfolio.iter().map(|item| view! {
                        <div class="card bg-base-100 overflow-hidden shadow-sm hover:shadow-lg transition-all duration-300">
                            <div class="aspect-video bg-gradient-to-br from-primary/20 to-primary/5 flex items-center justify-center text-6xl">
                                {item.emblem}
                            </div>
                            <div class="p-6">
                                <h4 class="text-xl font-semibold mb-2">{item.title}</h4>
                                <p class="opacity-70">{item.description}</p>
                            </div>
                        </div>
                    }.into_any()).collect_view()
                }
                </div>
            </div>
        </section>
    }.into_any()
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <section id=Section::Projects.anchor() class="py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <h3 class="text-4xl font-bold mb-8 tracking-tight">"Projects"</h3>
                <p class="text-lg opacity-70 leading-relaxed mb-8">
                    "Experiments, open-source projects and studies. Every project is a chance \
                    to learn something new and share it with the community."
                </p>
                <div class="flex flex-col gap-6">
                {
                    content.projects.iter().map(|project| view! {
                        <div class="card bg-base-100 border border-base-200 hover:border-primary transition-colors duration-300 p-6">
                            <div class="flex items-start justify-between">
                                <div>
                                    <h4 class="text-xl font-semibold mb-2">{project.name}</h4>
                                    <p class="opacity-70 mb-2">{project.summary}</p>
                                    <p class="text-sm text-primary">{project.stack}</p>
                                </div>
                                <ExternalLinkIcon/>
                            </div>
                        </div>
                    }.into_any()).collect_view()
                }
                </div>
            </div>
        </section>
    }.into_any()
}

/// Contact section. The form is intentionally decorative: native HTML
/// constraints only, nothing is submitted anywhere.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor() class="py-20 px-6 bg-base-200/30">
            <div class="max-w-2xl mx-auto">
                <h3 class="text-4xl font-bold mb-8 tracking-tight text-center">"Contact"</h3>
                <div class="card bg-base-100 shadow-sm p-8">
                    <p class="opacity-70 mb-6 text-center flex items-center justify-center gap-2">
                        <MailIcon/>
                        "Have an idea for a project, or just want to say hi? Drop me a line!"
                    </p>
                    <form class="flex flex-col gap-4">
                        <input
                            type="text"
                            name="name"
                            class="input w-full"
                            placeholder="Your name"
                            required
                            maxlength=MAX_AUTHOR_NAME_LENGTH.to_string()
                        />
                        <input
                            type="email"
                            name="email"
                            class="input w-full"
                            placeholder="Email"
                            required
                            maxlength=MAX_AUTHOR_EMAIL_LENGTH.to_string()
                        />
                        <textarea
                            name="message"
                            class="textarea w-full"
                            placeholder="Message"
                            rows="5"
                            required
                            maxlength=MAX_CONTACT_MESSAGE_LENGTH.to_string()
                        ></textarea>
                        <button type="submit" class="button-secondary w-full flex items-center justify-center gap-2">
                            <SendIcon/>
                            "Send"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }.into_any()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-6 border-t border-base-200">
            <div class="max-w-6xl mx-auto text-center opacity-70">
                <p>{format!("© 2024 {SITE_NAME}. All rights reserved.")}</p>
            </div>
        </footer>
    }.into_any()
}
