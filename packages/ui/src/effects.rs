//! Runs a form submission inside a view and carries out the [`Effect`]s the
//! workflow hands back.

use std::time::Duration;

use dioxus::prelude::*;
use forms::{
    run_after, Authenticator, Effect, FormController, FormModel, LifetimeHandle, PreferenceStore,
    SignpostConfig, Submission, Toast, ToastKind, Workflow,
};

use crate::components::{use_toast, ToastOptions, Toasts};

/// Preference store for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Prefs = forms::LocalStoragePrefs;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Prefs = forms::MemoryPrefs;

/// The store provided by [`ConfigProvider`](crate::ConfigProvider).
pub fn use_prefs() -> Prefs {
    use_context::<Prefs>()
}

/// Shows [`Toast`]s through the toast primitive with the configured lifetime.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
    duration: Duration,
}

impl Notifier {
    pub fn show(&self, toast: Toast) {
        let mut options = ToastOptions::new().duration(self.duration);
        if let Some(description) = toast.description {
            options = options.description(description);
        }
        match toast.kind {
            ToastKind::Success => self.toasts.success(toast.title, options),
            ToastKind::Error => self.toasts.error(toast.title, options),
            ToastKind::Info => self.toasts.info(toast.title, options),
        };
    }
}

pub fn use_notifier() -> Notifier {
    let toasts = use_toast();
    let duration = use_context::<SignpostConfig>().forms.toast_duration();
    Notifier { toasts, duration }
}

/// Writes every `Persist` effect to `prefs`; returns the others.
pub(crate) fn persist(prefs: &impl PreferenceStore, effects: Vec<Effect>) -> Vec<Effect> {
    effects
        .into_iter()
        .filter(|effect| match effect {
            Effect::Persist { key, value } => {
                if let Err(e) = prefs.set(key, value) {
                    tracing::warn!("Failed to persist {}: {}", key, e);
                }
                false
            }
            _ => true,
        })
        .collect()
}

fn carry_out(
    effects: Vec<Effect>,
    notifier: Notifier,
    prefs: &Prefs,
    lifetime: LifetimeHandle,
    on_navigate: EventHandler<String>,
    mut on_success: impl FnMut(),
) {
    for effect in persist(prefs, effects) {
        match effect {
            Effect::Notify(toast) => notifier.show(toast),
            Effect::Persist { .. } => {}
            Effect::ShowSuccess => on_success(),
            Effect::Navigate { to, after } => {
                let lifetime = lifetime.clone();
                spawn(async move {
                    run_after(after, lifetime, move || on_navigate.call(to)).await;
                });
            }
        }
    }
}

/// Validate `form`, hand the payload to `authenticator` and carry out the
/// outcome. A form that fails validation never starts the workflow.
/// `on_success` receives the submitted payload when the workflow asks for the
/// success view.
pub(crate) fn submit_in_view<T, A>(
    mut form: Signal<FormController<T>>,
    mut workflow: Signal<Workflow<T>>,
    authenticator: A,
    notifier: Notifier,
    prefs: Prefs,
    on_navigate: EventHandler<String>,
    mut on_success: impl FnMut(&T) + 'static,
) where
    T: Submission + FormModel + 'static,
    A: Authenticator<T> + 'static,
{
    let payload = match workflow.write().start(&mut form.write()) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(flow = %T::FLOW, "submit not started: {}", e);
            return;
        }
    };
    spawn(async move {
        let result = authenticator.submit(&payload).await;
        let effects = workflow.write().complete(&payload, result);
        let lifetime = workflow.read().lifetime();
        carry_out(effects, notifier, &prefs, lifetime, on_navigate, || {
            on_success(&payload)
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms::prefs::{REMEMBER_ME_KEY, REMEMBER_ME_VALUE};
    use forms::MemoryPrefs;

    #[test]
    fn test_persist_writes_to_the_shared_store() {
        let shared = MemoryPrefs::new();
        let view_copy = shared.clone();
        let effects = vec![
            Effect::Persist {
                key: REMEMBER_ME_KEY,
                value: REMEMBER_ME_VALUE,
            },
            Effect::Notify(Toast::success("Welcome back!")),
        ];

        let rest = persist(&view_copy, effects);
        assert_eq!(rest, vec![Effect::Notify(Toast::success("Welcome back!"))]);
        assert_eq!(shared.get(REMEMBER_ME_KEY).as_deref(), Some("true"));
    }
}
