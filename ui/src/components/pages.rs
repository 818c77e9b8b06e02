use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::blocks::BlockList;
use crate::api;
use crate::demo::demo_page;

#[component]
pub fn DemoPage() -> impl IntoView {
    view! { <BlockList blocks=demo_page() /> }
}

#[component]
pub fn PageList() -> impl IntoView {
    let pages = LocalResource::new(|| async move { api::list_pages().await });

    view! {
        <div class="page-list">
            <h2>"Pages"</h2>
            <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
                {move || {
                    pages.get().map(|result| match result {
                        Ok(list) if !list.is_empty() => view! {
                            <ul>
                                {list
                                    .into_iter()
                                    .map(|page| {
                                        let href = view_href(&page.name);
                                        view! {
                                            <li>
                                                <a href=href>{page.title}</a>
                                                <span class="block-count">
                                                    {format!(" ({} blocks)", page.blocks)}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any(),
                        Ok(_) => view! { <p>"No pages configured"</p> }.into_any(),
                        Err(e) => view! { <div class="error">{format!("Failed to load pages: {}", e)}</div> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Client-side route of a page
pub fn view_href(name: &str) -> String {
    format!("/view/{}", urlencoding::encode(name))
}

/// Loads one page from the server and mounts its blocks
#[component]
pub fn PageView() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.read().get("name").unwrap_or_default();

    let page = LocalResource::new(move || {
        let name = name();
        async move { api::get_page(&name).await }
    });

    view! {
        <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(page) => {
                        log::info!("Mounted page {} ({})", page.name, page.display_title());
                        view! { <BlockList blocks=page.content /> }.into_any()
                    }
                    Err(e) => view! { <div class="error">{e}</div> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_href_encodes_name() {
        assert_eq!(view_href("contact"), "/view/contact");
        assert_eq!(view_href("faq?"), "/view/faq%3F");
        assert_eq!(view_href("team page"), "/view/team%20page");
    }
}
