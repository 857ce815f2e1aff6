use std::rc::Rc;

use compute::{Tab, ViewAction};
use model::AnalysisData;
use yew::prelude::*;

use super::metrics::{CategoryBreakdown, MetricCards};
use super::summary::AnalysisSummary;
use super::tabs::TabNavigation;
use crate::api_client::fetch_analysis_data;
use crate::components::gallery::{AnalysisImageGallery, InteractiveMapGallery};
use crate::components::hotspots::GeospatialHotspots;
use crate::components::layout::{Footer, Header};
use crate::components::trends::{SeasonalChart, YearlyChart};
use crate::hooks::{use_fetch, use_view_state};
use crate::settings;
use crate::ui::fetch_render::FetchRender;

/// Fetches the artifact on mount and shows loading, error or the main view.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let fetch_state = use_fetch(fetch_analysis_data);

    let render = Callback::from(|data: Rc<AnalysisData>| {
        html! { <DashboardView data={data} /> }
    });

    html! {
        <FetchRender<Rc<AnalysisData>>
            state={(*fetch_state).clone()}
            render={render}
            loading_text={Some("Fetching data from the offline analysis".to_string())}
        />
    }
}

#[derive(Properties, PartialEq)]
struct ViewProps {
    data: Rc<AnalysisData>,
}

#[function_component(DashboardView)]
fn dashboard_view(props: &ViewProps) -> Html {
    let store = use_view_state();
    let config = use_memo((), |_| settings::get_settings().dashboard);

    let on_action = {
        let store = store.clone();
        Callback::from(move |action: ViewAction| store.dispatch(action))
    };

    let state = store.state.clone();
    let data = props.data.clone();
    log::trace!("Rendering tab: {}", state.tab);

    let content = match state.tab {
        Tab::Overview => html! {
            <div class="space-y-6">
                <SeasonalChart data={data.clone()} />
                <CategoryBreakdown data={data.clone()} />
            </div>
        },
        Tab::InteractiveMap => html! {
            <div class="space-y-6">
                <GeospatialHotspots
                    data={data.clone()}
                    state={state.clone()}
                    config={(*config).clone()}
                    on_action={on_action.clone()}
                />
                <InteractiveMapGallery
                    data={data.clone()}
                    deny={config.excluded_assets.clone()}
                />
            </div>
        },
        Tab::AdvancedAnalysis => html! {
            <div class="bg-slate-800/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
                <h2 class="text-2xl font-bold text-white mb-6 flex items-center">
                    <span class="mr-2">{"🔬"}</span>
                    {"Advanced Geospatial Analysis"}
                </h2>
                <AnalysisImageGallery
                    data={data.clone()}
                    deny={config.excluded_assets.clone()}
                    expanded={state.expanded_image.clone()}
                    on_action={on_action.clone()}
                />
            </div>
        },
        Tab::TemporalPatterns => html! { <YearlyChart data={data.clone()} /> },
    };

    html! {
        <>
            <Header metadata={data.metadata.clone()} />
            <main class="container mx-auto px-6 py-8">
                <MetricCards data={data.clone()} />
                <TabNavigation active={state.tab} on_action={on_action.clone()} />
                <div class="mb-8">{content}</div>
                <AnalysisSummary data={data.clone()} />
            </main>
            <Footer
                date_range={data.metadata.date_range.clone()}
                generated_at={data.generated_at.clone()}
            />
        </>
    }
}
