use yew::prelude::*;

use super::error::ErrorDisplay;
use super::loading::Loading;
use crate::hooks::FetchState;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub loading_text: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading_text == other.loading_text
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows the loading screen
/// - Error: shows the error screen, never the main view
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        FetchState::Error(err) => html! { <ErrorDisplay message={err.clone()} /> },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
