pub mod toast;

pub use toast::{ToastKind, render_toast};
