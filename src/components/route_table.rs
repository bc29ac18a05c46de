use leptos::{component, view, CollectView, IntoView, ReadSignal, SignalGet};

use crate::render::RenderPlan;

/// Route rows for the current page plus the pagination controls.
///
/// Rows of renderable routes re-trigger their primitive's highlight on
/// click, mirroring a click on the polyline itself.
#[component]
pub fn RouteTable(
    plan: ReadSignal<Option<RenderPlan>>,
    on_page: impl Fn(bool) + Copy + 'static,
    on_row_click: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="route-table">
            {move || {
                plan.get().filter(|plan| !plan.no_matches).map(|plan| {
                    let page = plan.page;
                    let at_first = page.page_index == 0;
                    let at_last = page.page_index + 1 >= page.total_pages;
                    let rows = plan
                        .route_rows
                        .into_iter()
                        .map(|row| {
                            let renderable = row.primitive_id.is_some();
                            let primitive_id = row.primitive_id;
                            view! {
                                <tr
                                    class:renderable=renderable
                                    on:click=move |_| {
                                        if let Some(id) = primitive_id.clone() {
                                            on_row_click(id);
                                        }
                                    }
                                >
                                    <td>{row.target}</td>
                                    <td>{row.path}</td>
                                    <td>{row.hop_count}</td>
                                    <td>{row.observed.unwrap_or_default()}</td>
                                </tr>
                            }
                        })
                        .collect_view();

                    view! {
                        <h3>"Routes"</h3>
                        <table>
                            <thead>
                                <tr>
                                    <th>"Target"</th>
                                    <th>"Path"</th>
                                    <th>"Hops"</th>
                                    <th>"Observed"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                        <div class="pagination">
                            <button disabled=at_first on:click=move |_| on_page(false)>
                                "Previous"
                            </button>
                            <span>
                                {format!("Page {} of {}", page.page_index + 1, page.total_pages.max(1))}
                            </span>
                            <button disabled=at_last on:click=move |_| on_page(true)>
                                "Next"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
