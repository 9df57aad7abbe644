//! Paper subscription flow: locate a paper, confirm its metadata, verify the
//! subscriber's email, subscribe.

pub mod state;

#[cfg(target_arch = "wasm32")]
mod view;
#[cfg(target_arch = "wasm32")]
pub(crate) use view::PaperForm;
