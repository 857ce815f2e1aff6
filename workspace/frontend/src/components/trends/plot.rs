use plotly::common::{Font, Title};
use plotly::layout::Axis;
use plotly::Layout;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

pub const CHART_HEIGHT: usize = 400;
pub const TOTAL_COLOR: &str = "#e2e8f0";

/// Serializes a trace so traces of different types can share one plot.
pub fn trace<T: Serialize>(trace: &T) -> Option<Value> {
    serde_json::to_value(trace)
        .map_err(|e| log::error!("Could not serialize trace: {}", e))
        .ok()
}

/// Titled layout on the dashboard's dark background.
pub fn dark_layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .x_axis(Axis::new().title(Title::with_text(x_title)))
        .y_axis(Axis::new().title(Title::with_text(y_title)))
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)")
        .font(Font::new().color("#cbd5e1"))
        .height(CHART_HEIGHT)
}

/// Hands the traces and layout to Plotly, rendering into the element with `div_id`.
pub fn draw(div_id: &str, traces: &[Value], layout: &Layout) {
    match to_js(traces).and_then(|data| Ok((data, to_js(layout)?))) {
        Ok((data, layout)) => {
            log::trace!("Drawing {} traces into #{}", traces.len(), div_id);
            newPlot(div_id, data, layout);
        }
        Err(err) => log::error!("Could not draw chart #{}: {}", div_id, err),
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}
