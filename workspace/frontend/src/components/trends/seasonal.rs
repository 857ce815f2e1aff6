use std::rc::Rc;

use common::format::group_thousands;
use compute::charts::{peak_record, seasonal_records, series_color, series_keys, series_label};
use model::AnalysisData;
use plotly::common::{Line, Mode};
use plotly::Scatter;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot::{dark_layout, draw, trace, CHART_HEIGHT, TOTAL_COLOR};

const CHART_ID: &str = "seasonal-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
}

/// Monthly totals with one line per category series.
#[function_component(SeasonalChart)]
pub fn seasonal_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let records = seasonal_records(&props.data.seasonal_patterns);
    let peak = peak_record(&records).map(|r| format!("Peak: {} ({} events)", r.label, group_thousands(r.total)));

    use_effect_with((container_ref.clone(), records), |(container_ref, records)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let months: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
            let totals: Vec<u64> = records.iter().map(|r| r.total).collect();

            let mut traces = Vec::new();
            traces.extend(trace(
                &Scatter::new(months.clone(), totals)
                    .mode(Mode::LinesMarkers)
                    .name("Total")
                    .line(Line::new().color(TOTAL_COLOR).width(3.0)),
            ));
            for key in series_keys(records) {
                // Months without this series render as gaps
                let values: Vec<Option<u64>> = records.iter().map(|r| r.value(&key)).collect();
                traces.extend(trace(
                    &Scatter::new(months.clone(), values)
                        .mode(Mode::Lines)
                        .name(&series_label(&key))
                        .line(Line::new().color(series_color(&key)).width(2.0)),
                ));
            }

            draw(CHART_ID, &traces, &dark_layout("Seasonal Patterns", "Month", "Events"));
        }
        || ()
    });

    html! {
        <div class="bg-slate-800/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-2xl font-bold text-white">{"Seasonal Patterns"}</h2>
                if let Some(peak) = peak {
                    <span class="text-sm text-slate-400">{peak}</span>
                }
            </div>
            <div ref={container_ref} style={format!("width:100%; height:{}px;", CHART_HEIGHT)}></div>
        </div>
    }
}
