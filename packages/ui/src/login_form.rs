//! Email/password login form with remember-me, theme toggle and social buttons.

use dioxus::prelude::*;
use forms::{field, login_schema, Credentials, FormController, SignpostConfig, Toast, Workflow};

use crate::components::Button;
use crate::effects::{submit_in_view, use_notifier, use_prefs};
use crate::fields::{PasswordField, TextField};
use crate::social::SocialButtons;
use crate::theme::{Theme, ThemeToggle};

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

/// Login form component.
///
/// `on_navigate` receives route strings: the post-login redirect and the
/// signup link target.
#[component]
pub fn LoginForm(
    on_navigate: EventHandler<String>,
    #[props(default = "/signup".to_string())] signup_route: String,
    #[props(default = true)] show_theme_toggle: bool,
) -> Element {
    let config = use_context::<SignpostConfig>();
    let mut form = use_signal({
        let policy = config.login_policy();
        let revalidate = config.forms.revalidate_on_change;
        move || FormController::<Credentials>::new(login_schema(policy)).with_revalidate_on_change(revalidate)
    });
    let workflow = use_signal({
        let navigation = config.navigation.clone();
        move || Workflow::<Credentials>::new(navigation)
    });
    let theme = use_signal(Theme::default);
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
            |_: &Credentials| {},
        );
    };

    let values = form.read().values().clone();
    let email_error = form.read().error(field::EMAIL).map(str::to_string);
    let password_error = form.read().error(field::PASSWORD).map(str::to_string);
    let loading = workflow.read().is_submitting();
    let signup_href = signup_route.clone();

    rsx! {
        document::Stylesheet { href: FORMS_CSS }

        div {
            class: "auth-page",
            "data-theme": theme().as_str(),

            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    div {
                        h1 { class: "auth-title", "Welcome back" }
                        p { class: "auth-subtitle", "Sign in to your account to continue" }
                    }
                    if show_theme_toggle {
                        ThemeToggle { theme }
                    }
                }

                form {
                    class: "auth-form",
                    novalidate: true,
                    onsubmit: handle_submit,

                    TextField {
                        id: "login-email",
                        label: "Email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        autocomplete: "email",
                        value: values.email.clone(),
                        disabled: loading,
                        error: email_error,
                        oninput: move |value: String| {
                            form.write().input(field::EMAIL, value);
                        },
                    }

                    PasswordField {
                        id: "login-password",
                        label: "Password",
                        placeholder: "Enter your password",
                        value: values.password.clone(),
                        disabled: loading,
                        error: password_error,
                        oninput: move |value: String| {
                            form.write().input(field::PASSWORD, value);
                        },
                    }

                    div {
                        class: "auth-row",
                        label {
                            class: "auth-checkbox",
                            input {
                                r#type: "checkbox",
                                checked: values.remember_me,
                                disabled: loading,
                                onchange: move |_| {
                                    let current = form.read().values().remember_me;
                                    form.write().toggle(field::REMEMBER_ME, !current);
                                },
                            }
                            span { "Remember me" }
                        }
                        a {
                            class: "auth-link",
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                notifier.show(
                                    Toast::info("Password reset")
                                        .describe("Password recovery is not available yet."),
                                );
                            },
                            "Forgot password?"
                        }
                    }

                    Button {
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Signing in..." } else { "Sign in" }
                    }
                }

                SocialButtons { disabled: loading }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    a {
                        class: "auth-link",
                        href: "{signup_route}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(signup_href.clone());
                        },
                        "Sign up"
                    }
                }
            }
        }
    }
}
