//! # Submission workflow
//!
//! Drives one form's submit lifecycle:
//!
//! ```text
//! Idle ──begin──▶ Submitting ──complete(Ok)──▶ Succeeded (terminal)
//!   ▲                  │
//!   └──── begin ◀── Failed ◀──complete(Err)──┘
//! ```
//!
//! The workflow never performs side effects itself. [`Workflow::complete`]
//! returns a list of [`Effect`]s (toast, persisted flag, success view,
//! delayed navigation) for the view to carry out. The asynchronous step
//! itself sits behind the [`Authenticator`] trait.
//!
//! [`Workflow::start`] joins a [`FormController`] to the workflow: a form that
//! fails validation never leaves `Idle`/`Failed`, and the authenticator is
//! never called for it. [`Workflow::submit_form`] runs the whole round trip.
//!
//! A workflow owns the [`Lifetime`] of its view. After
//! [`tear_down`](Workflow::tear_down) it refuses new submissions, drops the
//! effects of any in-flight completion, and every delayed navigation bound to
//! its [`LifetimeHandle`] becomes a no-op.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use crate::config::NavigationConfig;
use crate::controller::FormController;
use crate::error::{SubmitError, WorkflowError};
use crate::models::{Credentials, FormModel, Registration};
use crate::notify::Toast;
use crate::prefs::{REMEMBER_ME_KEY, REMEMBER_ME_VALUE};
use crate::timer::{Lifetime, LifetimeHandle};

/// The asynchronous authentication step for payload `T`.
pub trait Authenticator<T> {
    fn submit(&self, payload: &T) -> impl Future<Output = Result<(), SubmitError>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    Login,
    Signup,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Signup => "signup",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A side effect requested by the workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Notify(Toast),
    Persist { key: &'static str, value: &'static str },
    /// Replace the form with the confirmation view.
    ShowSuccess,
    Navigate { to: String, after: Duration },
}

/// What a payload type contributes to the workflow.
pub trait Submission {
    const FLOW: Flow;

    fn success_effects(&self, navigation: &NavigationConfig) -> Vec<Effect>;

    fn failure_toast() -> Toast;
}

impl Submission for Credentials {
    const FLOW: Flow = Flow::Login;

    fn success_effects(&self, navigation: &NavigationConfig) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(3);
        if self.remember_me {
            effects.push(Effect::Persist {
                key: REMEMBER_ME_KEY,
                value: REMEMBER_ME_VALUE,
            });
        }
        effects.push(Effect::Notify(
            Toast::success("Welcome back!").describe("You have been logged in successfully."),
        ));
        effects.push(Effect::Navigate {
            to: navigation.login_target.clone(),
            after: Duration::from_millis(navigation.login_delay_ms),
        });
        effects
    }

    fn failure_toast() -> Toast {
        Toast::error("Login failed").describe("Invalid email or password. Please try again.")
    }
}

impl Submission for Registration {
    const FLOW: Flow = Flow::Signup;

    fn success_effects(&self, navigation: &NavigationConfig) -> Vec<Effect> {
        vec![
            Effect::Notify(
                Toast::success("Account created!")
                    .describe("Your account has been created successfully. Please log in."),
            ),
            Effect::ShowSuccess,
            Effect::Navigate {
                to: navigation.signup_target.clone(),
                after: Duration::from_millis(navigation.signup_delay_ms),
            },
        ]
    }

    fn failure_toast() -> Toast {
        Toast::error("Registration failed").describe("Something went wrong. Please try again.")
    }
}

#[derive(Debug)]
pub struct Workflow<T: Submission> {
    state: SubmissionState,
    navigation: NavigationConfig,
    lifetime: Lifetime,
    _payload: PhantomData<fn(T)>,
}

impl<T: Submission> Workflow<T> {
    pub fn new(navigation: NavigationConfig) -> Self {
        Self {
            state: SubmissionState::Idle,
            navigation,
            lifetime: Lifetime::new(),
            _payload: PhantomData,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The loading flag: inputs and the submit control are disabled while set.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }

    pub fn can_submit(&self) -> bool {
        self.lifetime.handle().is_alive()
            && matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
    }

    pub fn lifetime(&self) -> LifetimeHandle {
        self.lifetime.handle()
    }

    /// Mark the owning view as gone.
    pub fn tear_down(&mut self) {
        tracing::debug!(flow = %T::FLOW, state = ?self.state, "tearing down workflow");
        self.lifetime.end();
    }

    fn ready(&self) -> Result<(), WorkflowError> {
        if !self.lifetime.handle().is_alive() {
            return Err(WorkflowError::TornDown);
        }
        match self.state {
            SubmissionState::Submitting => Err(WorkflowError::Busy),
            SubmissionState::Succeeded => Err(WorkflowError::Finished),
            SubmissionState::Idle | SubmissionState::Failed => Ok(()),
        }
    }

    /// `Idle | Failed → Submitting`.
    pub fn begin(&mut self) -> Result<(), WorkflowError> {
        self.ready()?;
        tracing::debug!(flow = %T::FLOW, "submission started");
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Validate `form` and, if it passes, begin. Returns the payload to hand
    /// to the authenticator. Validation errors stay on the controller.
    pub fn start(&mut self, form: &mut FormController<T>) -> Result<T, WorkflowError>
    where
        T: FormModel,
    {
        self.ready()?;
        let payload = form.submit().map_err(WorkflowError::Invalid)?;
        self.begin()?;
        Ok(payload)
    }

    /// `Submitting → Succeeded | Failed`. Returns the effects to carry out;
    /// empty when the view is already gone or no submission was in flight.
    pub fn complete(&mut self, payload: &T, result: Result<(), SubmitError>) -> Vec<Effect> {
        if self.state != SubmissionState::Submitting {
            tracing::warn!(flow = %T::FLOW, state = ?self.state, "completion without a submission in flight");
            return Vec::new();
        }
        let effects = match result {
            Ok(()) => {
                tracing::info!(flow = %T::FLOW, "submission succeeded");
                self.state = SubmissionState::Succeeded;
                payload.success_effects(&self.navigation)
            }
            Err(e) => {
                tracing::warn!(flow = %T::FLOW, error = %e, "submission failed");
                self.state = SubmissionState::Failed;
                vec![Effect::Notify(T::failure_toast())]
            }
        };
        if !self.lifetime.handle().is_alive() {
            tracing::debug!(flow = %T::FLOW, "view torn down, dropping effects");
            return Vec::new();
        }
        effects
    }

    /// Convenience driver: begin, await the authenticator, complete.
    pub async fn run<A: Authenticator<T>>(
        &mut self,
        payload: &T,
        authenticator: &A,
    ) -> Result<Vec<Effect>, WorkflowError> {
        self.begin()?;
        let result = authenticator.submit(payload).await;
        Ok(self.complete(payload, result))
    }

    /// [`start`](Self::start), await the authenticator, complete.
    pub async fn submit_form<A: Authenticator<T>>(
        &mut self,
        form: &mut FormController<T>,
        authenticator: &A,
    ) -> Result<Vec<Effect>, WorkflowError>
    where
        T: FormModel,
    {
        let payload = self.start(form)?;
        let result = authenticator.submit(&payload).await;
        Ok(self.complete(&payload, result))
    }
}
