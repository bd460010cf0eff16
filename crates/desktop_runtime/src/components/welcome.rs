use std::time::Duration;

use leptos::*;
use platform_host::SoundCue;
use system_ui::Toast;

use super::use_desktop_runtime;
use crate::catalog;

/// Delay before the notification slides in.
const WELCOME_DELAY: Duration = Duration::from_millis(500);
/// Time the notification stays up without interaction.
const WELCOME_AUTO_CLOSE: Duration = Duration::from_secs(10);
/// Slide-out animation length before the toast is removed.
const WELCOME_EXIT: Duration = Duration::from_millis(500);

/// Runs `f` after `delay` unless the component is torn down first.
fn schedule(f: impl FnOnce() + 'static, delay: Duration) {
    match set_timeout_with_handle(f, delay) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("welcome timer not scheduled: {err:?}"),
    }
}

#[component]
/// Welcome toast shown once per session after boot.
pub(super) fn WelcomeNotification() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let settings = &catalog::catalog().welcome;
    let visible = create_rw_signal(false);
    let mounted = create_rw_signal(true);

    let dismiss = move || {
        if !mounted.get_untracked() {
            return;
        }
        visible.set(false);
        set_timeout(move || mounted.set(false), WELCOME_EXIT);
    };

    schedule(
        move || {
            visible.set(true);
            runtime.host.get_value().play_sound(SoundCue::Notification);
        },
        WELCOME_DELAY,
    );
    schedule(dismiss, WELCOME_AUTO_CLOSE);

    view! {
        <Show when=move || mounted.get() fallback=|| ()>
            <Toast
                title=settings.title.clone()
                visible=visible
                on_close=Callback::new(move |_| dismiss())
            >
                <p>{settings.message.clone()}</p>
            </Toast>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_shows_before_it_auto_closes() {
        assert!(WELCOME_DELAY < WELCOME_AUTO_CLOSE);
        assert_eq!(WELCOME_AUTO_CLOSE, Duration::from_secs(10));
        assert_eq!(WELCOME_DELAY + WELCOME_EXIT, Duration::from_secs(1));
    }
}
