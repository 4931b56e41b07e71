//! # Forms — validation, strength and submission logic for the login and signup pages
//!
//! Everything here is plain Rust with no UI dependency, so the `ui` crate's
//! components stay thin and this crate carries the tests.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Credentials` / `Registration` payloads and by-name field access |
//! | [`schema`] | Ordered field rules, login presets, the signup schema |
//! | [`strength`] | Point-scoring password strength estimator |
//! | [`controller`] | Explicit field state: values + errors driven by discrete events |
//! | [`workflow`] | Submit state machine producing side-effect descriptions |
//! | [`notify`] | Toast tuples and the social sign-in placeholder |
//! | [`prefs`] | Where the `rememberMe` flag is written |
//! | [`timer`] | Platform sleep and lifetime-guarded delayed actions |
//! | [`config`] | `signpost.toml` |

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod prefs;
pub mod schema;
pub mod strength;
pub mod timer;
pub mod workflow;

pub use config::SignpostConfig;
pub use controller::{FieldEvent, FormController};
pub use error::{ConfigError, PreferenceError, SubmitError, WorkflowError};
pub use models::{field, Credentials, FormModel, Registration};
pub use notify::{social_sign_in, SocialProvider, Toast, ToastKind};
pub use prefs::{MemoryPrefs, PreferenceStore};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use prefs::LocalStoragePrefs;
pub use schema::{login_schema, signup_schema, FormSchema, LoginPolicy, LoginPreset, ValidationErrors};
pub use strength::PasswordStrength;
pub use timer::{run_after, Lifetime, LifetimeHandle};
pub use workflow::{Authenticator, Effect, Flow, Submission, SubmissionState, Workflow};
