use leptos::prelude::*;

use super::SITE_OWNER;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn copyright_year(build_time: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.format("%Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(BUILD_TIME).unwrap_or_default();
    view! {
        <footer class="py-4 px-4 bg-slate-950 text-slate-400 border-t border-slate-800">
            <div class="container mx-auto text-center">
                <p class="text-sm">{format!("© {year} {SITE_OWNER}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        assert_eq!(
            copyright_year("2024-11-03T08:15:00.123456+00:00").as_deref(),
            Some("2024")
        );
        assert!(copyright_year("yesterday").is_none());
        assert!(copyright_year(BUILD_TIME).is_some());
    }
}
