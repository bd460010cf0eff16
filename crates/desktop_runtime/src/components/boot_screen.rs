use std::time::Duration;

use leptos::*;
use system_ui::{Button, ButtonVariant, FallbackImage, ProgressBar};

use super::{use_desktop_runtime, DesktopRuntimeContext};
use crate::{
    boot::{
        bios_script, BootCommand, BootEvent, BootSequence, BootStage, SystemBootRandom,
        LOADING_SYSTEM_LINE,
    },
    catalog,
};

/// Runs [`BootSequence`] commands against browser timers and the host.
#[derive(Clone, Copy)]
struct BootDriver {
    runtime: DesktopRuntimeContext,
    machine: RwSignal<BootSequence>,
    rng: StoredValue<SystemBootRandom>,
}

impl BootDriver {
    fn send(self, event: BootEvent) {
        let mut commands = Vec::new();
        self.rng.update_value(|rng| {
            self.machine
                .update(|machine| commands = machine.handle(event, rng));
        });
        for command in commands {
            match command {
                BootCommand::Schedule { delay_ms, event } => set_timeout(
                    move || self.send(event),
                    Duration::from_millis(u64::from(delay_ms)),
                ),
                BootCommand::PlaySound(cue) => self.runtime.host.get_value().play_sound(cue),
                BootCommand::Complete => self.runtime.complete_boot(),
            }
        }
    }
}

fn render_bios_text(script: &[String], revealed: usize, dots: u8) -> String {
    script
        .iter()
        .take(revealed)
        .map(|line| {
            if line == LOADING_SYSTEM_LINE {
                format!("{line} {}\n", ".".repeat(usize::from(dots)))
            } else {
                format!("{line}\n")
            }
        })
        .collect()
}

#[component]
/// BIOS text, loading bar, and login screen shown before the desktop.
pub(super) fn BootScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let settings = &catalog::catalog().desktop;
    let script = bios_script(&settings.owner);
    let driver = BootDriver {
        runtime,
        machine: create_rw_signal(BootSequence::new(script.len(), settings.show_login)),
        rng: store_value(SystemBootRandom::default()),
    };
    driver.send(BootEvent::Start);

    let stage = create_memo(move |_| driver.machine.with(BootSequence::stage));
    let assets = runtime.host.get_value().assets().clone();
    let logo = assets.image_url(&settings.start_button_icon);
    let profile = assets.image_url(&settings.profile_image);
    let owner_initial: String = settings.owner.chars().take(1).collect();

    view! {
        <div class="boot-screen" data-ui-kind="boot-screen" data-stage=move || stage.get().token()>
            {move || match stage.get() {
                BootStage::Bios => {
                    let script = script.clone();
                    view! {
                        <div class="boot-bios">
                            <FallbackImage src=logo.clone() alt="" fallback="" layout_class="boot-bios-logo"/>
                            <pre class="boot-bios-text">
                                {move || {
                                    driver.machine.with(|machine| {
                                        render_bios_text(&script, machine.revealed_lines(), machine.dots())
                                    })
                                }}
                            </pre>
                        </div>
                    }
                    .into_view()
                }
                BootStage::Loading => view! {
                    <div class="boot-loading">
                        <FallbackImage src=logo.clone() alt="Windows" fallback="Windows XP"/>
                        <ProgressBar value=Signal::derive(move || driver.machine.with(BootSequence::progress))/>
                        <p>"Loading Art Portfolio System..."</p>
                    </div>
                }
                .into_view(),
                BootStage::Login | BootStage::Complete => {
                    let profile = profile.clone();
                    let owner_initial = owner_initial.clone();
                    view! {
                        <div class="boot-login">
                            <p class="boot-login-hint">"To begin, click your user name"</p>
                            <Button
                                variant=ButtonVariant::Quiet
                                layout_class="boot-login-user"
                                selected=Signal::derive(move || {
                                    driver.machine.with(BootSequence::user_selected)
                                })
                                on_click=Callback::new(move |_| driver.send(BootEvent::UserSelected))
                            >
                                <FallbackImage
                                    src=profile
                                    alt=settings.owner.clone()
                                    fallback=owner_initial
                                />
                                <span>"User"</span>
                            </Button>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bios_text_animates_only_the_loading_line() {
        let script = vec!["BIOS".to_string(), LOADING_SYSTEM_LINE.to_string()];
        assert_eq!(render_bios_text(&script, 1, 3), "BIOS\n");
        assert_eq!(render_bios_text(&script, 2, 2), "BIOS\nLoading System ..\n");
    }
}
