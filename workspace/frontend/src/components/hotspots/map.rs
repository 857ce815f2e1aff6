use std::rc::Rc;

use common::format::group_thousands;
use common::DashboardConfig;
use compute::{build_markers, filter_hotspots, CategorySelection, DashboardState, HotspotStats, ViewAction};
use model::{AnalysisData, Category};
use yew::prelude::*;

use super::legend::CategoryLegend;
use super::stats::HotspotStatsPanel;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
    pub state: DashboardState,
    pub config: DashboardConfig,
    pub on_action: Callback<ViewAction>,
}

/// Category filter, pseudo-map of hotspot markers and the stats of the
/// filtered set.
#[function_component(GeospatialHotspots)]
pub fn geospatial_hotspots(props: &Props) -> Html {
    let hotspots = &props.data.hotspots;
    let selection = &props.state.category;

    let markers = build_markers(hotspots, selection, &props.config);
    // Stats cover every match, not only the markers that made the limit
    let stats = HotspotStats::from_hotspots(filter_hotspots(
        hotspots,
        selection,
        props.config.category_matching,
    ));

    let selections = std::iter::once(CategorySelection::All).chain(
        Category::ALL
            .into_iter()
            .map(|category| CategorySelection::parse(category.filter_token())),
    );

    html! {
        <div class="bg-slate-800/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                <h2 class="text-2xl font-bold text-white flex items-center">
                    <span class="mr-2">{"🗺️"}</span>
                    {"Geospatial Hotspots"}
                </h2>
                <div class="flex flex-wrap gap-2">
                    { for selections.map(|choice| {
                        let active = &choice == selection;
                        let label = match &choice {
                            CategorySelection::All => "All".to_string(),
                            CategorySelection::Only(token) => token.clone(),
                        };
                        let onclick = {
                            let on_action = props.on_action.clone();
                            let choice = choice.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_action.emit(ViewAction::SelectCategory(choice.clone()))
                            })
                        };
                        let class = if active {
                            "bg-blue-500 text-white"
                        } else {
                            "bg-slate-700 text-slate-300 hover:bg-slate-600"
                        };
                        html! {
                            <button key={choice.token().to_string()} {onclick}
                                class={classes!("px-3", "py-1", "rounded-lg", "text-sm", "transition-all", class)}>
                                {label}
                            </button>
                        }
                    })}
                </div>
            </div>

            <div class="relative w-full h-96 bg-gradient-to-b from-slate-900 to-blue-950 rounded-lg overflow-hidden border border-slate-700">
                <div class="absolute inset-0 opacity-20"
                    style="background-image: linear-gradient(rgba(148,163,184,0.3) 1px, transparent 1px), linear-gradient(90deg, rgba(148,163,184,0.3) 1px, transparent 1px); background-size: 10% 16.66%;">
                </div>
                // Titles can repeat, so the position keeps each key unique
                { for markers.iter().enumerate().map(|(idx, marker)| html! {
                    <MarkerDot
                        key={format!("{}:{}", idx, marker.title())}
                        title={marker.title().to_string()}
                        category={marker.hotspot.primary_category.clone()}
                        count={marker.hotspot.count}
                        left={marker.position.x}
                        top={marker.position.y}
                        size={marker.size}
                        halo={marker.halo}
                        color={marker.color}
                        hovered={props.state.is_hovered(marker.title())}
                        on_action={props.on_action.clone()}
                    />
                })}
                if markers.is_empty() {
                    <div class="absolute inset-0 flex items-center justify-center text-slate-400">
                        {"No hotspots match this category"}
                    </div>
                }
            </div>

            <CategoryLegend />
            <HotspotStatsPanel stats={stats} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MarkerProps {
    title: String,
    category: String,
    count: u64,
    left: f64,
    top: f64,
    size: f64,
    halo: f64,
    color: &'static str,
    hovered: bool,
    on_action: Callback<ViewAction>,
}

#[function_component(MarkerDot)]
fn marker_dot(props: &MarkerProps) -> Html {
    let onmouseenter = {
        let on_action = props.on_action.clone();
        let title = props.title.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::HoverMarker(title.clone())))
    };
    let onmouseleave = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::ClearHover))
    };

    let anchor = format!(
        "left: {:.3}%; top: {:.3}%; transform: translate(-50%, -50%);",
        props.left, props.top
    );
    let halo = format!(
        "width: {0:.1}px; height: {0:.1}px; background-color: {1}; opacity: 0.3;",
        props.halo, props.color
    );
    let dot = format!(
        "width: {0:.1}px; height: {0:.1}px; background-color: {1};",
        props.size, props.color
    );

    html! {
        <div class="absolute cursor-pointer" style={anchor} {onmouseenter} {onmouseleave}>
            <div class="relative flex items-center justify-center">
                <div class="absolute rounded-full animate-ping" style={halo}></div>
                <div class="relative rounded-full border-2 border-white/50 shadow-lg" style={dot}></div>
            </div>
            if props.hovered {
                <div class="absolute z-10 left-1/2 -translate-x-1/2 bottom-full mb-2 bg-slate-900 border border-slate-600 rounded-lg p-3 shadow-xl whitespace-nowrap">
                    <div class="font-bold text-white">{&props.title}</div>
                    <div class="text-sm text-slate-300">{&props.category}</div>
                    <div class="text-sm text-slate-400">{format!("{} events", group_thousands(props.count))}</div>
                </div>
            }
        </div>
    }
}
