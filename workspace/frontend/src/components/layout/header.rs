use common::format::group_thousands;
use model::Metadata;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metadata: Metadata,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let metadata = &props.metadata;

    html! {
        <header class="bg-slate-900/80 backdrop-blur-sm border-b border-blue-500/20 sticky top-0 z-50">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between flex-wrap gap-4">
                    <div class="flex items-center space-x-4">
                        <div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-cyan-500 rounded-lg flex items-center justify-center">
                            <span class="text-2xl">{"🌍"}</span>
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-white">{"NASA EONET Dashboard"}</h1>
                            <p class="text-sm text-blue-300">{"Natural Event Tracker Analysis"}</p>
                        </div>
                    </div>
                    <div class="text-right">
                        <p class="text-sm text-blue-300 font-semibold">
                            {format!("{} → {}", metadata.date_range.start, metadata.date_range.end)}
                        </p>
                        <p class="text-xs text-slate-400">
                            {format!("{} Observations", group_thousands(metadata.total_observations))}
                        </p>
                    </div>
                </div>
            </div>
        </header>
    }
}
