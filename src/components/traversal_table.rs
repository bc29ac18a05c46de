use leptos::{component, view, CollectView, IntoView, ReadSignal, SignalGet};

use crate::render::RenderPlan;

/// Ranked table of the nodes the current selection passes through, or the
/// explicit empty-selection notice. Hidden entirely while idle.
#[component]
pub fn TraversalTable(plan: ReadSignal<Option<RenderPlan>>) -> impl IntoView {
    view! {
        <div class="traversal-table">
            {move || {
                plan.get().map(|plan| {
                    if plan.no_matches {
                        view! {
                            <p class="no-routes">"No outgoing routes for this node."</p>
                        }
                        .into_view()
                    } else {
                        let rows = plan
                            .node_rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.node_id}</td>
                                        <td>{row.name}</td>
                                        <td>{row.traversal_count}</td>
                                    </tr>
                                }
                            })
                            .collect_view();

                        view! {
                            <h3>"Traversed nodes"</h3>
                            <table>
                                <thead>
                                    <tr>
                                        <th>"ASN"</th>
                                        <th>"Name"</th>
                                        <th>"Traversals"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        }
                        .into_view()
                    }
                })
            }}
        </div>
    }
}
