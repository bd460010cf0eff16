use desktop_runtime::{configured_asset_layout, DeepLinkState, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

/// Reads the `open` query parameter (`?open=2d-arts,about-me`) into a deep link.
fn deep_link_from_query(query: &ParamsMap) -> DeepLinkState {
    query
        .get("open")
        .map(|raw| DeepLinkState::parse(raw))
        .unwrap_or_default()
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let owner = &desktop_runtime::catalog::catalog().desktop.owner;

    view! {
        <Title text=format!("{owner}'s Art Portfolio") />
        <Meta name="description" content="An art portfolio presented as a retro desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/folders/:slug" view=FolderRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let deep_link = query.with_untracked(deep_link_from_query);

    view! {
        <DesktopProvider
            host_services=build_host_services(configured_asset_layout())
            deep_link=deep_link
        >
            <DesktopShell />
        </DesktopProvider>
    }
}

/// `/folders/<slug>` opens that folder straight away, skipping the boot sequence.
#[component]
fn FolderRoute() -> impl IntoView {
    let params = use_params_map();
    let deep_link = params.with_untracked(|map| {
        map.get("slug")
            .map(|slug| DeepLinkState::parse(slug))
            .unwrap_or_default()
    });

    view! {
        <DesktopProvider
            host_services=build_host_services(configured_asset_layout())
            deep_link=deep_link
            skip_boot=true
        >
            <DesktopShell />
        </DesktopProvider>
    }
}
