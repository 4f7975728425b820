mod about;
#[cfg(feature = "hydrate")]
mod browser;
mod contact;
mod education;
mod experience;
mod footer;
mod header;
mod hooks;
mod homepage;
mod navigation;
mod services;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use education::EducationPage;
use experience::ExperiencePage;
use homepage::HomePage;
use hooks::use_scroll_top;
use navigation::Navigation;
use services::ServicesPage;
use skills::SkillsPage;
use testimonials::TestimonialsPage;

pub const SITE_OWNER: &str = "Saif Arabi";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Professional portfolio showcasing expertise in backend development, networking, and server management"
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />

        <Router>
            <ScrollToTop />
            <Navigation />
            <main class="flex flex-col flex-grow w-full min-h-screen pt-28">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/education") view=EducationPage />
                    <Route path=path!("/experience") view=ExperiencePage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/testimonials") view=TestimonialsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders nothing; keeps the viewport at the top across loads and navigation.
#[component]
fn ScrollToTop() -> impl IntoView {
    use_scroll_top();
}
