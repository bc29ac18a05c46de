use leptos::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};

#[allow(unused_imports)]
use crate::logging::log;

use crate::catalogue::GeoCatalogue;
use crate::components::node_table::NodeTable;
use crate::components::route_table::RouteTable;
use crate::components::traversal_table::TraversalTable;
use crate::data;
use crate::dedup::DedupPolicy;
use crate::map_bridge::MapBridge;
use crate::models::{NodeId, Point};
use crate::render::{MarkerSpec, RenderPlan, RenderUpdate};
use crate::routes::RouteStore;
use crate::selection::RouteExplorer;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The engine and the map bridge live outside the reactive graph; only
    // the render plan and the catalogue listing are signals.
    let explorer = store_value(None::<RouteExplorer>);
    let bridge = store_value(MapBridge::new());

    let (plan, set_plan) = create_signal(None::<RenderPlan>);
    let (catalogue_points, set_catalogue_points) = create_signal(Vec::<Point>::new());
    let (load_error, set_load_error) = create_signal(None::<String>);

    let handle_select = move |node: NodeId| {
        explorer.update_value(|slot| {
            let Some(engine) = slot.as_mut() else { return };
            let update = engine.select(node);

            let revealed: Vec<MarkerSpec> = match &update {
                RenderUpdate::Draw(new_plan) => new_plan
                    .revealed_nodes
                    .iter()
                    .filter_map(|&id| engine.catalogue().lookup(id))
                    .map(MarkerSpec::for_point)
                    .collect(),
                _ => Vec::new(),
            };

            bridge.with_value(|map| {
                map.apply(&update);
                map.set_revealed_markers(&revealed);
            });

            match update {
                RenderUpdate::Draw(new_plan) => set_plan.set(Some(new_plan)),
                RenderUpdate::Clear => set_plan.set(None),
                RenderUpdate::Highlight(_) => {}
            }
        });
    };

    let handle_highlight = move |primitive_id: String| {
        explorer.update_value(|slot| {
            let Some(engine) = slot.as_mut() else { return };
            let Some(update) = engine.highlight(&primitive_id) else {
                return;
            };
            bridge.with_value(|map| map.apply(&update));
        });
    };

    let handle_page = move |forward: bool| {
        explorer.update_value(|slot| {
            let Some(engine) = slot.as_mut() else { return };
            let update = if forward {
                engine.next_page()
            } else {
                engine.prev_page()
            };
            let Some(update) = update else { return };

            bridge.with_value(|map| map.apply(&update));
            if let RenderUpdate::Draw(new_plan) = update {
                set_plan.set(Some(new_plan));
            }
        });
    };

    // Both feeds are fetched exactly once per session. The guard keeps a
    // second mount (e.g. hot reload) from re-issuing the requests; the
    // catalogue and store built here are the memoized copies every later
    // aggregation request reuses.
    let feeds_requested = store_value(false);
    if !feeds_requested.get_value() {
        feeds_requested.set_value(true);

        spawn_local(async move {
            let raw_points = match data::fetch_points().await {
                Ok(values) => values,
                Err(error) => {
                    set_load_error.set(Some(error));
                    return;
                }
            };
            let raw_routes = match data::fetch_routes().await {
                Ok(values) => values,
                Err(error) => {
                    set_load_error.set(Some(error));
                    return;
                }
            };

            let (catalogue, rejections) = GeoCatalogue::load(&raw_points);
            for rejection in &rejections {
                log!(
                    "Dropped point {} ({:?}): {}",
                    rejection.index,
                    rejection.id,
                    rejection.reason
                );
            }
            let store = RouteStore::load(&raw_routes);
            log!(
                "Feeds loaded: {} points ({} rejected), {} routes",
                catalogue.len(),
                rejections.len(),
                store.len()
            );

            let markers: Vec<MarkerSpec> = catalogue
                .all()
                .filter(|point| point.route_count > 0)
                .map(MarkerSpec::for_point)
                .collect();
            let listed: Vec<Point> = catalogue
                .all()
                .filter(|point| point.route_count > 0)
                .cloned()
                .collect();

            bridge.with_value(|map| {
                map.set_markers(&markers);
                map.on_marker_click(handle_select);
                map.on_route_click(handle_highlight);
            });

            set_catalogue_points.set(listed);
            explorer.set_value(Some(RouteExplorer::new(
                catalogue,
                store,
                DedupPolicy::default(),
            )));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/bgp_atlas.css"/>
        <Title text="AS-Path Atlas"/>

        <div class="app">
            <div id="map"></div>
            <div class="sidebar">
                <div class="sidebar-header">
                    <h2>"AS-Path Atlas"</h2>
                    {move || load_error.get().map(|error| view! { <p class="load-error">{error}</p> })}
                </div>
                <TraversalTable plan=plan/>
                <RouteTable plan=plan on_page=handle_page on_row_click=handle_highlight/>
                <NodeTable points=catalogue_points on_select=handle_select/>
            </div>
        </div>
    }
}
