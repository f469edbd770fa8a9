use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use inkline_components::articles::ArticlesSection;
use inkline_components::comments::CommentsModal;
use inkline_components::navigation_bar::NavigationBar;
use inkline_components::sections::{AboutSection, ContactSection, Footer, HomeSection, PortfolioSection, ProjectsSection};
use inkline_core::content::SiteContent;
use inkline_core::state::GlobalState;
use inkline_utils::error_template::ErrorTemplate;
use inkline_utils::errors::AppError;
use inkline_utils::notification::ToastHost;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Meta
                    http_equiv="Content-Security-Policy"
                    content=move || {
                        // this will insert the CSP with nonce on the server, be empty on client
                        use_nonce().map(|nonce| {
                            format!(
                                "default-src 'self';
                                script-src 'strict-dynamic' 'nonce-{nonce}' 'wasm-unsafe-eval';
                                img-src 'self' https: data:;
                                style-src 'self' 'nonce-{nonce}';
                                connect-src 'self' https: ws://localhost:3001/ ws://127.0.0.1:3001/;"
                            )
                        }).unwrap_or_default()
                    }
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Read-only site content and global UI state for the whole app
    provide_context(SiteContent::builtin());
    provide_context(GlobalState::new());

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/inkline.css"/>

        // sets the document title
        <Title text="Welcome to Inkline"/>
        <Router>
            <main class="min-h-screen bg-base-100">
                <Routes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(AppError::NotFound);
                    view! {
                        <ErrorTemplate outside_errors/>
                    }
                }>
                    <Route path=StaticSegment("") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Renders the single landing page: all sections, the toast overlay and the
/// conditionally mounted comments modal.
#[component]
fn LandingPage() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <NavigationBar/>
        <HomeSection/>
        <ArticlesSection/>
        <AboutSection/>
        <PortfolioSection/>
        <ProjectsSection/>
        <ContactSection/>
        <Footer/>
        {
            // selecting an article mounts the modal, closing unmounts it
            move || state.open_article_id.get().map(|article_id| view! {
                <CommentsModal
                    article_id
                    on_close=Callback::new(move |_| state.open_article_id.set(None))
                />
            })
        }
        <ToastHost
            toast=state.toast
            on_dismiss=Callback::new(move |_| state.dismiss_toast())
        />
    }.into_any()
}
