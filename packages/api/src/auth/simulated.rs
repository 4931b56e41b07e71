//! # Simulated authentication backend
//!
//! Stands in for the real login/registration endpoints: waits a fixed
//! latency, then resolves with a scripted [`Outcome`]. There is no network
//! call, no timeout and no cancellation; the view's lifetime guard takes care
//! of completions that arrive after teardown.

use std::time::Duration;

use forms::{Authenticator, Credentials, Registration, SubmitError};

/// How every request resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Accept,
    Fail(SubmitError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedAuth {
    latency: Duration,
    outcome: Outcome,
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SimulatedAuth {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Outcome::Accept,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Log in with email and password.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SubmitError> {
        tracing::debug!(
            email = %credentials.email,
            remember_me = credentials.remember_me,
            "simulated login"
        );
        self.resolve().await
    }

    /// Register a new account.
    pub async fn register(&self, registration: &Registration) -> Result<(), SubmitError> {
        tracing::debug!(email = %registration.email, "simulated registration");
        self.resolve().await
    }

    async fn resolve(&self) -> Result<(), SubmitError> {
        forms::timer::sleep(self.latency).await;
        match &self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Fail(e) => Err(e.clone()),
        }
    }
}

impl Authenticator<Credentials> for SimulatedAuth {
    async fn submit(&self, payload: &Credentials) -> Result<(), SubmitError> {
        self.login(payload).await
    }
}

impl Authenticator<Registration> for SimulatedAuth {
    async fn submit(&self, payload: &Registration) -> Result<(), SubmitError> {
        self.register(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms::config::NavigationConfig;
    use forms::{field, signup_schema, Effect, FormController, SubmissionState, ToastKind, Workflow};

    fn fast() -> SimulatedAuth {
        SimulatedAuth::new(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_login_accepts_by_default() {
        let creds = Credentials::new("user@example.com", "Passw0rd1");
        assert_eq!(fast().login(&creds).await, Ok(()));
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let auth = fast().with_outcome(Outcome::Fail(SubmitError::Rejected));
        let reg = Registration::default();
        assert_eq!(auth.register(&reg).await, Err(SubmitError::Rejected));
    }

    #[tokio::test]
    async fn test_drives_login_workflow() {
        let creds = Credentials::new("user@example.com", "Passw0rd1");
        let mut workflow = Workflow::<Credentials>::new(NavigationConfig::default());

        let effects = workflow.run(&creds, &fast()).await.unwrap();
        assert_eq!(workflow.state(), SubmissionState::Succeeded);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify(toast) if toast.kind == ToastKind::Success
        )));
        assert!(effects.iter().any(|e| matches!(e, Effect::Navigate { to, .. } if to == "/")));
    }

    #[tokio::test]
    async fn test_drives_signup_failure() {
        let auth = fast().with_outcome(Outcome::Fail(SubmitError::Unavailable("maintenance".into())));
        let mut workflow = Workflow::<Registration>::new(NavigationConfig::default());

        let effects = workflow.run(&Registration::default(), &auth).await.unwrap();
        assert_eq!(workflow.state(), SubmissionState::Failed);
        assert!(matches!(
            &effects[..],
            [Effect::Notify(toast)] if toast.title == "Registration failed"
        ));
    }

    #[tokio::test]
    async fn test_signup_form_round_trip() {
        let mut form = FormController::<Registration>::new(signup_schema());
        form.input(field::FULL_NAME, " Ada Lovelace ");
        form.input(field::EMAIL, "ada@example.com ");
        form.input(field::PASSWORD, "Abcdef12");
        form.input(field::CONFIRM_PASSWORD, "Abcdef12");
        let mut workflow = Workflow::<Registration>::new(NavigationConfig::default());

        let effects = workflow.submit_form(&mut form, &fast()).await.unwrap();
        assert!(effects.contains(&Effect::ShowSuccess));
        assert_eq!(workflow.state(), SubmissionState::Succeeded);
    }
}
