use model::{Category, FALLBACK_BADGE};
use yew::prelude::*;

#[function_component(CategoryLegend)]
pub fn category_legend() -> Html {
    html! {
        <div class="flex flex-wrap gap-4 mt-4 text-sm text-slate-300">
            { for Category::ALL.into_iter().map(|category| html! {
                <div key={category.label()} class="flex items-center gap-2">
                    <span class={classes!("w-3", "h-3", "rounded-full", category.badge_class())}></span>
                    {category.label()}
                </div>
            })}
            <div class="flex items-center gap-2">
                <span class={classes!("w-3", "h-3", "rounded-full", FALLBACK_BADGE)}></span>
                {"Other"}
            </div>
        </div>
    }
}
