use crate::audio::{AudioHandle, use_audio_state};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const VOLUME_STEP: f64 = 0.05;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub audio: AudioHandle,
}

/// Mute toggle and volume slider bound to the session's playback state.
#[function_component(AudioControls)]
pub fn audio_controls(props: &Props) -> Html {
    let state = use_audio_state(&props.audio);

    let on_toggle = {
        let audio = props.audio.clone();
        Callback::from(move |_: MouseEvent| audio.toggle_mute())
    };
    let on_volume = {
        let audio = props.audio.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(volume) = input.value().parse::<f64>() {
                audio.set_volume(volume);
            }
        })
    };
    // The shell treats any click or key press as an autoplay gesture, which
    // would undo a mute made here.
    let stop_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let stop_key = Callback::from(|e: KeyboardEvent| e.stop_propagation());

    let (icon, label) = if state.is_muted {
        ("🔇", "Unmute music")
    } else {
        ("🔊", "Mute music")
    };
    let status = if state.is_playing { "♪ Playing" } else { "♪ Paused" };

    html! {
        <div
            class="audio-controls"
            role="group"
            aria-label="Music"
            onclick={stop_click}
            onkeydown={stop_key}
        >
            <button
                type="button"
                class="audio-controls__mute"
                aria-label={label}
                aria-pressed={state.is_muted.to_string()}
                onclick={on_toggle}
            >
                { icon }
            </button>
            <input
                type="range"
                class="audio-controls__volume"
                min="0"
                max="1"
                step={VOLUME_STEP.to_string()}
                value={state.volume.to_string()}
                aria-label="Music volume"
                oninput={on_volume}
            />
            <span class="audio-controls__status">{ status }</span>
        </div>
    }
}
