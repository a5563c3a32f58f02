// Media element wiring. Mounted once next to the app shell.
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::PlaybackController;
#[cfg(target_arch = "wasm32")]
use crate::config::PlayerConfig;

#[cfg(target_arch = "wasm32")]
use super::web_helpers::{defer_media_event, get_or_create_audio_element, web_playback_error_message};
#[cfg(target_arch = "wasm32")]
use super::{MediaEvent, UNAVAILABLE_MESSAGE};
#[cfg(target_arch = "wasm32")]
use dioxus::core::Runtime;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Headless targets have no media element to drive.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlaybackController>();
    let config = use_context::<PlayerConfig>();

    // Create the element and attach listeners once.
    use_hook(move || {
        let element_id = controller.element_id().to_string();
        let Some(audio) = get_or_create_audio_element(&element_id) else {
            tracing::warn!("Could not create the audio element; playback is disabled");
            return;
        };
        audio.set_volume(config.initial_volume());
        let runtime = Runtime::current();

        let time_closure = {
            let runtime = runtime.clone();
            let controller = controller.clone();
            let element_id = element_id.clone();
            Closure::wrap(Box::new(move || {
                if let Some(audio) = get_or_create_audio_element(&element_id) {
                    defer_media_event(
                        runtime.clone(),
                        controller.clone(),
                        MediaEvent::TimeUpdate(audio.current_time()),
                    );
                }
            }) as Box<dyn FnMut()>)
        };
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let metadata_closure = {
            let runtime = runtime.clone();
            let controller = controller.clone();
            let element_id = element_id.clone();
            Closure::wrap(Box::new(move || {
                if let Some(audio) = get_or_create_audio_element(&element_id) {
                    defer_media_event(
                        runtime.clone(),
                        controller.clone(),
                        MediaEvent::LoadedMetadata(audio.duration()),
                    );
                }
            }) as Box<dyn FnMut()>)
        };
        audio.set_onloadedmetadata(Some(metadata_closure.as_ref().unchecked_ref()));
        metadata_closure.forget();

        let ended_closure = {
            let runtime = runtime.clone();
            let controller = controller.clone();
            Closure::wrap(Box::new(move || {
                defer_media_event(runtime.clone(), controller.clone(), MediaEvent::Ended);
            }) as Box<dyn FnMut()>)
        };
        audio.set_onended(Some(ended_closure.as_ref().unchecked_ref()));
        ended_closure.forget();

        let error_closure = {
            let runtime = runtime.clone();
            let controller = controller.clone();
            let element_id = element_id.clone();
            Closure::wrap(Box::new(move || {
                let message = get_or_create_audio_element(&element_id)
                    .and_then(|audio| web_playback_error_message(&audio))
                    .unwrap_or_else(|| UNAVAILABLE_MESSAGE.to_string());
                defer_media_event(runtime.clone(), controller.clone(), MediaEvent::Error(message));
            }) as Box<dyn FnMut()>)
        };
        audio.set_onerror(Some(error_closure.as_ref().unchecked_ref()));
        error_closure.forget();
    });

    rsx! {}
}
