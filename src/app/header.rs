use leptos::prelude::*;

/// Gradient page title with an optional subtitle.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("page-header text-center mt-6 mb-12 {class}")>
            <h1 class="text-4xl md:text-5xl font-bold mb-4">
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400">
                    {title}
                </span>
            </h1>
            {subtitle
                .map(|s| {
                    view! {
                        <p class="text-lg md:text-xl max-w-2xl mx-auto leading-relaxed">
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-300 via-purple-300 to-pink-300">
                                {s}
                            </span>
                        </p>
                    }
                })}
        </div>
    }
}
