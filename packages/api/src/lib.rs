//! # API crate — the authentication step behind the forms
//!
//! The pages never talk to a server directly. They hand a validated payload to
//! an [`forms::Authenticator`]; this crate provides the implementations.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`SimulatedAuth`]: fixed latency, scripted accept / fail |
//!
//! A real backend slots in by implementing `Authenticator<Credentials>` and
//! `Authenticator<Registration>` and mapping transport failures onto
//! [`forms::SubmitError`].

pub mod auth;

pub use auth::{Outcome, SimulatedAuth};
pub use forms::{Credentials, Registration, SubmitError};
