mod component;
pub use component::*;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};
