use std::rc::Rc;

use common::format::group_thousands;
use compute::charts::{growth_percent, peak_record, seasonal_records, yearly_records};
use model::AnalysisData;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
}

/// Closing panel with the key findings, all derived from the loaded data.
#[function_component(AnalysisSummary)]
pub fn analysis_summary(props: &Props) -> Html {
    let data = &props.data;
    let seasonal = seasonal_records(&data.seasonal_patterns);
    let yearly = yearly_records(&data.yearly_trends);

    let peak = peak_record(&seasonal).map(|record| {
        format!("{} is the busiest month with {} events", record.label, group_thousands(record.total))
    });
    let growth = growth_percent(&yearly).map(|percent| {
        format!("Observations changed by {percent:.1}% across the tracked years")
    });

    html! {
        <div class="bg-gradient-to-r from-blue-900/50 to-purple-900/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
            <h2 class="text-2xl font-bold text-white mb-4">{"Analysis Summary"}</h2>
            <ul class="space-y-2 text-slate-300">
                <li>
                    {format!(
                        "{} observations of {} unique events over {} years",
                        group_thousands(data.metadata.total_observations),
                        group_thousands(data.metadata.unique_events),
                        data.metadata.years_tracked
                    )}
                </li>
                <li>{format!("{} geographic hotspots identified", data.hotspots.len())}</li>
                if let Some(peak) = peak {
                    <li>{peak}</li>
                }
                if let Some(growth) = growth {
                    <li>{growth}</li>
                }
            </ul>
        </div>
    }
}
