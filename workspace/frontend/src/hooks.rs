use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use compute::{DashboardState, ViewAction};
use yew::prelude::*;

pub use common::FetchState;

/// Runs `fetch_fn` once on mount and tracks its outcome.
///
/// The state starts as `Loading` and settles exactly once; there is no
/// refetch, a failed load stays failed until the page is reloaded.
#[hook]
pub fn use_fetch<T, E, F, Fut>(fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    E: Display + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let fetch_state = use_state(FetchState::default);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            log::trace!("Fetching on mount");
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_fn().await;
                fetch_state.set(FetchState::resolve(result));
            });
            || ()
        });
    }

    fetch_state
}

/// Reducer wrapper so the view state is only changed through [`ViewAction`]s.
#[derive(Debug, Default, PartialEq)]
pub struct ViewStore {
    pub state: DashboardState,
}

impl Reducible for ViewStore {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
        log::debug!("View action: {:?}", action);
        let mut state = self.state.clone();
        state.apply(action);
        Rc::new(Self { state })
    }
}

#[hook]
pub fn use_view_state() -> UseReducerHandle<ViewStore> {
    use_reducer(ViewStore::default)
}
