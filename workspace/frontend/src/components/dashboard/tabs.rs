use compute::{Tab, ViewAction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Tab,
    pub on_action: Callback<ViewAction>,
}

#[function_component(TabNavigation)]
pub fn tab_navigation(props: &Props) -> Html {
    html! {
        <div class="flex gap-2 mb-6 overflow-x-auto pb-2">
            { for Tab::ALL.into_iter().map(|tab| {
                let onclick = {
                    let on_action = props.on_action.clone();
                    Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::SelectTab(tab)))
                };
                let class = if tab == props.active {
                    "bg-blue-500 text-white shadow-lg"
                } else {
                    "bg-slate-700 text-slate-300 hover:bg-slate-600"
                };
                html! {
                    <button
                        key={tab.label()}
                        {onclick}
                        class={classes!("px-4", "py-2", "rounded-lg", "whitespace-nowrap", "transition-all", class)}
                    >
                        {tab.label()}
                    </button>
                }
            })}
        </div>
    }
}
