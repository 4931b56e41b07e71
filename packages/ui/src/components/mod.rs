//! Styled wrappers over `dioxus-primitives`.

pub mod button;
pub use button::{Button, ButtonVariant};

pub mod input;
pub use input::Input;

pub mod label;
pub use label::Label;

pub mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
