use std::rc::Rc;

use common::format::{group_thousands, share};
use compute::metrics::{category_metric, executive_cards};
use model::{AnalysisData, Category};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
}

#[derive(Properties, PartialEq)]
struct CardProps {
    icon: &'static str,
    label: &'static str,
    value: String,
    detail: String,
    accent: &'static str,
}

#[function_component(MetricCard)]
fn metric_card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("bg-slate-800/50", "rounded-xl", "p-6", "border", "shadow-xl", props.accent)}>
            <div class="flex items-center justify-between mb-2">
                <span class="text-3xl">{props.icon}</span>
                <span class="text-sm text-slate-400">{&props.detail}</span>
            </div>
            <div class="text-3xl font-bold text-white">{&props.value}</div>
            <div class="text-sm text-slate-400 mt-1">{props.label}</div>
        </div>
    }
}

/// The four headline cards above the tab bar.
#[function_component(MetricCards)]
pub fn metric_cards(props: &Props) -> Html {
    let metadata = &props.data.metadata;
    let wildfires = category_metric(&props.data, Category::Wildfires);
    let storms = category_metric(&props.data, Category::SevereStorms);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            <MetricCard
                icon="📊"
                label="Total Observations"
                value={group_thousands(metadata.total_observations)}
                detail={format!("{} years", metadata.years_tracked)}
                accent="border-blue-500/20"
            />
            <MetricCard
                icon="🌍"
                label="Unique Events"
                value={group_thousands(metadata.unique_events)}
                detail={"tracked".to_string()}
                accent="border-emerald-500/20"
            />
            <MetricCard
                icon="🔥"
                label="Wildfires"
                value={group_thousands(wildfires.count)}
                detail={share(wildfires.share_percent)}
                accent="border-red-500/20"
            />
            <MetricCard
                icon="⛈️"
                label="Severe Storms"
                value={group_thousands(storms.count)}
                detail={share(storms.share_percent)}
                accent="border-blue-500/20"
            />
        </div>
    }
}

/// Count and share of every category, with its colour.
#[function_component(CategoryBreakdown)]
pub fn category_breakdown(props: &Props) -> Html {
    let cards = executive_cards(&props.data);

    html! {
        <div class="bg-slate-800/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
            <h2 class="text-2xl font-bold text-white mb-6">{"Category Breakdown"}</h2>
            <div class="space-y-4">
                { for cards.into_iter().map(|card| {
                    let width = format!("width: {:.1}%; background-color: {};", card.share_percent, card.category.hex());
                    html! {
                        <div key={card.category.label()}>
                            <div class="flex justify-between text-sm mb-1">
                                <span class="flex items-center gap-2 text-slate-300">
                                    <span class={classes!("w-3", "h-3", "rounded-full", card.category.badge_class())}></span>
                                    {card.category.label()}
                                </span>
                                <span class="text-slate-400">
                                    {format!("{} ({})", group_thousands(card.count), share(card.share_percent))}
                                </span>
                            </div>
                            <div class="w-full bg-slate-700 rounded-full h-2">
                                <div class="h-2 rounded-full" style={width}></div>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
