use common::format::timestamp;
use model::DateRange;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub date_range: DateRange,
    #[prop_or_default]
    pub generated_at: Option<String>,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let generated = props
        .generated_at
        .as_deref()
        .map(timestamp)
        .unwrap_or_else(|| "unknown".to_string());

    html! {
        <footer class="bg-slate-900/80 border-t border-blue-500/20 mt-12 py-6">
            <div class="container mx-auto px-6 text-center">
                <p class="text-slate-400 text-sm">
                    {format!("Visualizations from the offline analysis | Generated: {}", generated)}
                </p>
                <p class="text-slate-500 text-xs mt-2">
                    {format!(
                        "NASA Earth Observatory Natural Event Tracker (EONET) | {} - {}",
                        props.date_range.start, props.date_range.end
                    )}
                </p>
            </div>
        </footer>
    }
}
