// Browser-only helpers around the shared audio element.

use super::{MediaEvent, PlaybackController, UNAVAILABLE_MESSAGE};
use dioxus::core::{Runtime, RuntimeGuard};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlAudioElement};

/// Returns the page's audio element, creating it on first use.
pub(super) fn get_or_create_audio_element(id: &str) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(id) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(id);
    // Keep preload light so tracks stream instead of buffering whole files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Starts playback. Only an autoplay refusal is reported back; aborts caused
/// by a newer source replacing this one are expected and dropped.
pub(super) fn web_try_play(audio: &HtmlAudioElement, controller: PlaybackController) {
    let runtime = Runtime::current();
    let source = controller.source_id();
    let promise = match audio.play() {
        Ok(promise) => promise,
        Err(err) => {
            if is_not_allowed(&err) {
                defer_media_event(runtime, controller, MediaEvent::PlayRejected);
            }
            return;
        }
    };
    spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            if is_not_allowed(&err) {
                let _guard = RuntimeGuard::new(runtime);
                controller.handle_media_event(source, MediaEvent::PlayRejected);
            }
        }
    });
}

fn is_not_allowed(err: &wasm_bindgen::JsValue) -> bool {
    js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
        .is_some_and(|name| name == "NotAllowedError")
}

/// Describes the element's current error, if it has one.
pub(super) fn web_playback_error_message(audio: &HtmlAudioElement) -> Option<String> {
    let error = audio.error()?;
    Some(match error.code() {
        1 => "Track unavailable: playback was aborted before it loaded.".to_string(),
        2 => "Track unavailable: network error while loading.".to_string(),
        3 => "Track unavailable: the audio could not be decoded.".to_string(),
        4 => "Track unavailable: no supported source was found.".to_string(),
        _ => UNAVAILABLE_MESSAGE.to_string(),
    })
}

/// Media callbacks can fire while a signal is borrowed for rendering, so
/// their state writes are pushed to the next tick. The event is stamped with
/// the source loaded when it fired, not the one loaded when it is applied.
pub(super) fn defer_media_event(
    runtime: Rc<Runtime>,
    controller: PlaybackController,
    event: MediaEvent,
) {
    let source = {
        let _guard = RuntimeGuard::new(runtime.clone());
        controller.source_id()
    };
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        let _guard = RuntimeGuard::new(runtime);
        controller.handle_media_event(source, event);
    });
}
