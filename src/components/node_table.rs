use leptos::{component, view, For, IntoView, ReadSignal, SignalGet};

use crate::models::{NodeId, Point};

/// Catalogue listing: one row per node the feed knows at least one route
/// for. Clicking a row acts like clicking the node's marker.
#[component]
pub fn NodeTable(
    points: ReadSignal<Vec<Point>>,
    on_select: impl Fn(NodeId) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="node-table">
            <h3>"Nodes"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"ASN"</th>
                        <th>"IP"</th>
                        <th>"City"</th>
                        <th>"Region"</th>
                        <th>"Routes"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || points.get()
                        key=|point| point.id
                        children=move |point: Point| {
                            let id = point.id;
                            view! {
                                <tr on:click=move |_| on_select(id)>
                                    <td>{point.id}</td>
                                    <td>{point.ip}</td>
                                    <td>{point.city}</td>
                                    <td>{point.region}</td>
                                    <td>{point.route_count}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
