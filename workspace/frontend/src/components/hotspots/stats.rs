use common::format::group_thousands;
use compute::HotspotStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: HotspotStats,
}

#[function_component(HotspotStatsPanel)]
pub fn hotspot_stats_panel(props: &Props) -> Html {
    let stats = props.stats;
    let tiles = [
        ("Total Events", group_thousands(stats.total)),
        ("Active Hotspots", stats.active_count.to_string()),
        ("Avg per Hotspot", group_thousands(stats.average)),
        ("Max Intensity", group_thousands(stats.max)),
    ];

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-6">
            { for tiles.into_iter().map(|(label, value)| html! {
                <div key={label} class="bg-slate-700/50 rounded-lg p-4 text-center">
                    <div class="text-2xl font-bold text-white">{value}</div>
                    <div class="text-xs text-slate-400 mt-1">{label}</div>
                </div>
            })}
        </div>
    }
}
