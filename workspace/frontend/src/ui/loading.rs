use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_else(|| "Loading Your Analysis...".to_string())]
    pub title: String,
    #[prop_or_default]
    pub text: Option<String>,
}

/// Full-screen placeholder shown while the artifact is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <div class="text-6xl mb-4 animate-bounce">{"🌍"}</div>
                <div class="text-white text-2xl font-bold mb-2">{&props.title}</div>
                {if let Some(text) = &props.text {
                    html! { <div class="text-slate-400">{text}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
