use std::rc::Rc;

use common::AssetDenyList;
use compute::assets::visible_assets;
use model::AnalysisData;
use yew::prelude::*;

use super::ANALYSIS_COMMAND;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
    pub deny: AssetDenyList,
}

/// Embeds each pre-rendered interactive map.
#[function_component(InteractiveMapGallery)]
pub fn interactive_map_gallery(props: &Props) -> Html {
    let maps = visible_assets(&props.data.available_visualizations.interactive_maps, &props.deny);

    html! {
        <div class="bg-slate-800/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
            <h2 class="text-2xl font-bold text-white mb-6">{"Interactive Maps"}</h2>
            if maps.is_empty() {
                <p class="text-slate-400">{format!("No interactive maps available. Run: {}", ANALYSIS_COMMAND)}</p>
            } else {
                <div class="space-y-6">
                    { for maps.into_iter().map(|(key, asset)| html! {
                        <div key={key}>
                            <h3 class="text-white font-semibold mb-2">{&asset.title}</h3>
                            <iframe
                                src={asset.path.clone()}
                                title={asset.title.clone()}
                                class="w-full h-[600px] rounded-lg border border-slate-700 bg-white"
                            />
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
