//! Registration form with live password strength and a confirmation view.

use dioxus::prelude::*;
use forms::{field, signup_schema, FormController, Registration, SignpostConfig, Workflow};

use crate::components::Button;
use crate::effects::{submit_in_view, use_notifier, use_prefs};
use crate::fields::{PasswordField, TextField};
use crate::social::SocialButtons;
use crate::strength_meter::StrengthMeter;

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

/// Signup form component.
///
/// After a successful registration the form is replaced by a confirmation
/// card until the delayed redirect to the login route fires.
#[component]
pub fn SignupForm(
    on_navigate: EventHandler<String>,
    #[props(default = "/login".to_string())] login_route: String,
) -> Element {
    let config = use_context::<SignpostConfig>();
    let mut form = use_signal({
        let revalidate = config.forms.revalidate_on_change;
        move || FormController::<Registration>::new(signup_schema()).with_revalidate_on_change(revalidate)
    });
    let workflow = use_signal({
        let navigation = config.navigation.clone();
        move || Workflow::<Registration>::new(navigation)
    });
    let mut registered = use_signal(|| Option::<String>::None);
    let notifier = use_notifier();
    let prefs = use_prefs();
    let auth = api::SimulatedAuth::new(config.submission.latency());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_in_view(
            form,
            workflow,
            auth.clone(),
            notifier,
            prefs.clone(),
            on_navigate,
            move |registration: &Registration| registered.set(Some(registration.email.clone())),
        );
    };

    if let Some(email) = registered() {
        let target = login_route.clone();
        return rsx! {
            document::Stylesheet { href: FORMS_CSS }
            div {
                class: "auth-page",
                div {
                    class: "auth-card auth-card--success",
                    h1 { class: "auth-title", "Account created!" }
                    p {
                        class: "auth-subtitle",
                        "We registered {email}. Redirecting you to the login page..."
                    }
                    Button {
                        r#type: "button",
                        onclick: move |_| on_navigate.call(target.clone()),
                        "Go to login"
                    }
                }
            }
        };
    }

    let values = form.read().values().clone();
    let error = move |name: &str| form.read().error(name).map(str::to_string);
    let loading = workflow.read().is_submitting();
    let login_href = login_route.clone();

    rsx! {
        document::Stylesheet { href: FORMS_CSS }

        div {
            class: "auth-page",

            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    div {
                        h1 { class: "auth-title", "Create an account" }
                        p { class: "auth-subtitle", "Enter your details to get started" }
                    }
                }

                form {
                    class: "auth-form",
                    novalidate: true,
                    onsubmit: handle_submit,

                    TextField {
                        id: "signup-name",
                        label: "Full name",
                        placeholder: "Ada Lovelace",
                        autocomplete: "name",
                        value: values.full_name.clone(),
                        disabled: loading,
                        error: error(field::FULL_NAME),
                        oninput: move |value: String| {
                            form.write().input(field::FULL_NAME, value);
                        },
                    }

                    TextField {
                        id: "signup-email",
                        label: "Email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        autocomplete: "email",
                        value: values.email.clone(),
                        disabled: loading,
                        error: error(field::EMAIL),
                        oninput: move |value: String| {
                            form.write().input(field::EMAIL, value);
                        },
                    }

                    PasswordField {
                        id: "signup-password",
                        label: "Password",
                        placeholder: "At least 8 characters",
                        autocomplete: "new-password",
                        value: values.password.clone(),
                        disabled: loading,
                        error: error(field::PASSWORD),
                        oninput: move |value: String| {
                            form.write().input(field::PASSWORD, value);
                        },
                    }

                    StrengthMeter { password: values.password.clone() }

                    PasswordField {
                        id: "signup-confirm-password",
                        label: "Confirm password",
                        placeholder: "Repeat your password",
                        autocomplete: "new-password",
                        value: values.confirm_password.clone(),
                        disabled: loading,
                        error: error(field::CONFIRM_PASSWORD),
                        oninput: move |value: String| {
                            form.write().input(field::CONFIRM_PASSWORD, value);
                        },
                    }

                    Button {
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Creating account..." } else { "Create account" }
                    }
                }

                SocialButtons { disabled: loading }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    a {
                        class: "auth-link",
                        href: "{login_route}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(login_href.clone());
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
