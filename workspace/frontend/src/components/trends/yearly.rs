use std::rc::Rc;

use compute::charts::{growth_percent, series_color, series_keys, series_label, yearly_records};
use model::AnalysisData;
use plotly::common::{Line, Marker, Mode};
use plotly::{Bar, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot::{dark_layout, draw, trace, CHART_HEIGHT, TOTAL_COLOR};

const CHART_ID: &str = "yearly-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
}

/// Yearly totals as bars, category series as lines on top.
#[function_component(YearlyChart)]
pub fn yearly_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let records = yearly_records(&props.data.yearly_trends);
    let growth = growth_percent(&records);

    use_effect_with((container_ref.clone(), records), |(container_ref, records)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);

            let years: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
            let totals: Vec<u64> = records.iter().map(|r| r.total).collect();

            let mut traces = Vec::new();
            traces.extend(trace(
                &Bar::new(years.clone(), totals)
                    .name("Total")
                    .marker(Marker::new().color(TOTAL_COLOR).opacity(0.4)),
            ));
            for key in series_keys(records) {
                let values: Vec<Option<u64>> = records.iter().map(|r| r.value(&key)).collect();
                traces.extend(trace(
                    &Scatter::new(years.clone(), values)
                        .mode(Mode::LinesMarkers)
                        .name(&series_label(&key))
                        .line(Line::new().color(series_color(&key)).width(2.0)),
                ));
            }

            draw(CHART_ID, &traces, &dark_layout("Yearly Trends", "Year", "Observations"));
        }
        || ()
    });

    html! {
        <div class="bg-slate-800/50 rounded-xl p-6 border border-blue-500/20 shadow-xl">
            <h2 class="text-2xl font-bold text-white mb-4">{"Temporal Patterns"}</h2>
            <div ref={container_ref} style={format!("width:100%; height:{}px;", CHART_HEIGHT)}></div>
            {match growth {
                Some(percent) => html! {
                    <p class="text-sm text-slate-400 mt-4">
                        {format!("Total observations changed by {:.1}% from the first to the last tracked year.", percent)}
                    </p>
                },
                None => html! {},
            }}
        </div>
    }
}
