use common::GENERATE_COMMAND;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Terminal error screen. No retry: the data has to be regenerated and the
/// page reloaded.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="bg-red-900/30 border border-red-500/50 rounded-xl p-8 max-w-2xl">
                <div class="text-6xl mb-4 text-center">{"⚠️"}</div>
                <h2 class="text-white text-2xl font-bold mb-4 text-center">{"Data Not Found"}</h2>
                <p class="text-slate-300 mb-4">{&props.message}</p>
                <div class="bg-slate-900 rounded-lg p-4">
                    <code class="text-green-400 text-sm">{GENERATE_COMMAND}</code>
                </div>
            </div>
        </div>
    }
}
