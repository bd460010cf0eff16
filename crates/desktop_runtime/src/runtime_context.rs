//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the manifest
//! cache signal, and boot gating. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{HostServices, ManifestCache};

use crate::{
    catalog, effect_executor,
    host::DesktopHostContext,
    model::{DeepLinkState, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Directory manifests loaded so far. Directories not yet loaded read as empty.
    pub manifests: RwSignal<ManifestCache>,
    /// Whether the boot sequence has finished and the desktop is shown.
    pub booted: RwSignal<bool>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Marks boot as finished.
    pub fn complete_boot(&self) {
        self.booted.set(true);
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext, deep_link: DeepLinkState) {
    runtime
        .host
        .get_value()
        .install_manifest_preload(runtime.manifests, catalog::catalog().known_directories());
    effect_executor::install(runtime);
    install_deep_link(runtime, deep_link);
}

/// Applies the deep link once, after boot completes.
fn install_deep_link(runtime: DesktopRuntimeContext, deep_link: DeepLinkState) {
    if deep_link.is_empty() {
        return;
    }
    let pending = store_value(Some(deep_link));
    create_effect(move |_| {
        if !runtime.booted.get() {
            return;
        }
        if let Some(deep_link) = pending.get_value() {
            pending.set_value(None);
            runtime.dispatch_action(DesktopAction::ApplyDeepLink { deep_link });
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the manifest preload.
///
/// # Panics
///
/// Panics if the embedded portfolio catalog fails validation.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Folders to open once boot completes.
    #[prop(optional)]
    deep_link: DeepLinkState,
    /// Starts with the desktop already shown.
    #[prop(optional)]
    skip_boot: bool,
    children: Children,
) -> impl IntoView {
    if let Err(err) = catalog::try_catalog() {
        panic!("invalid portfolio catalog: {err}");
    }

    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let manifests = create_rw_signal(ManifestCache::default());
    let booted = create_rw_signal(skip_boot);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        manifests,
        booted,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime, deep_link);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
