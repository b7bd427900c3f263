//! Registration form: submit interception and the fallback page.

pub mod api;
pub mod interceptor;
pub mod page;

pub use interceptor::{attach_to_document, intercept_form, intercept_form_with};
pub use page::RegisterPage;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_support;
