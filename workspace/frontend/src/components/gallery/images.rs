use std::rc::Rc;

use common::AssetDenyList;
use compute::assets::visible_assets;
use compute::ViewAction;
use model::AnalysisData;
use yew::prelude::*;

use super::ANALYSIS_COMMAND;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Rc<AnalysisData>,
    pub deny: AssetDenyList,
    /// Path of the image currently shown full size
    pub expanded: Option<String>,
    pub on_action: Callback<ViewAction>,
}

/// Thumbnail grid of the static analysis images with a full-size modal.
#[function_component(AnalysisImageGallery)]
pub fn analysis_image_gallery(props: &Props) -> Html {
    let images = visible_assets(&props.data.available_visualizations.static_images, &props.deny);

    if images.is_empty() {
        return html! {
            <div class="text-center py-12 text-slate-400">
                <div class="text-5xl mb-4">{"🖼️"}</div>
                <p>{"No analysis images available."}</p>
                <p class="text-sm mt-2">{format!("Run: {}", ANALYSIS_COMMAND)}</p>
            </div>
        };
    }

    let expanded = props.expanded.as_deref().and_then(|path| {
        images
            .iter()
            .find(|(_, asset)| asset.path == path)
            .map(|(_, asset)| (*asset).clone())
    });

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { for images.iter().map(|(key, asset)| {
                    let onclick = {
                        let on_action = props.on_action.clone();
                        let path = asset.path.clone();
                        Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::ExpandImage(path.clone())))
                    };
                    html! {
                        <div key={*key} {onclick}
                            class="bg-slate-700/50 rounded-lg overflow-hidden cursor-pointer hover:ring-2 hover:ring-blue-500 transition-all">
                            <img src={asset.path.clone()} alt={asset.title.clone()} class="w-full h-64 object-cover" />
                            <div class="p-4">
                                <h3 class="text-white font-semibold">{&asset.title}</h3>
                                <p class="text-xs text-slate-400 mt-1">{"Click to enlarge"}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
            if let Some(asset) = expanded {
                <ImageModal
                    path={asset.path}
                    title={asset.title}
                    on_action={props.on_action.clone()}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    path: String,
    title: String,
    on_action: Callback<ViewAction>,
}

#[function_component(ImageModal)]
fn image_modal(props: &ModalProps) -> Html {
    let close_on_backdrop = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::CloseImage))
    };
    let close_on_button = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            // The backdrop would otherwise receive the same click
            e.stop_propagation();
            on_action.emit(ViewAction::CloseImage)
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="fixed inset-0 z-50 bg-black/80 flex items-center justify-center p-4" onclick={close_on_backdrop}>
            <div class="relative max-w-6xl max-h-full" onclick={keep_open}>
                <button
                    class="absolute -top-10 right-0 text-white text-3xl hover:text-slate-300"
                    onclick={close_on_button}
                >
                    {"✕"}
                </button>
                <img src={props.path.clone()} alt={props.title.clone()} class="max-w-full max-h-[85vh] rounded-lg" />
                <p class="text-center text-white mt-3">{&props.title}</p>
            </div>
        </div>
    }
}
