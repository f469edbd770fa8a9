use leptos::prelude::*;

use inkline_core::content::{Article, SiteContent};
use inkline_core::state::{GlobalState, Section};
use inkline_utils::icons::ClockIcon;
use inkline_utils::widget::{CommentCountWidget, TagChip};

/// Grid of article cards; clicking a card opens its comments modal
#[component]
pub fn ArticlesSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <section id=Section::Articles.anchor() class="py-20 px-6 bg-base-200/30">
            <div class="max-w-6xl mx-auto">
                <h3 class="text-4xl font-bold mb-12 tracking-tight">"Articles"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {
                    content.articles.iter().map(|article| view! {
                        <ArticleCard article=*article/>
                    }.into_any()).collect_view()
                }
                </div>
            </div>
        </section>
    }.into_any()
}

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <button
            class="card bg-base-100 text-left shadow-sm hover:shadow-lg transition-all duration-300 cursor-pointer"
            on:click=move |_| state.open_article_id.set(Some(article.article_id))
        >
            <div class="p-6 flex flex-col gap-4">
                <div class="flex flex-wrap gap-2">
                {
                    article.tags.iter().map(|tag| view! {
                        <TagChip label=*tag/>
                    }.into_any()).collect_view()
                }
                </div>
                <h4 class="text-xl font-semibold leading-tight">{article.title}</h4>
                <p class="opacity-70 leading-relaxed">{article.excerpt}</p>
                <div class="flex items-center justify-between text-sm opacity-70">
                    <span class="flex items-center gap-1.5">
                        <ClockIcon/>
                        {article.date}
                    </span>
                    <CommentCountWidget count=article.comment_count/>
                </div>
            </div>
        </button>
    }.into_any()
}
