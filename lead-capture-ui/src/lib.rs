pub mod app;
pub mod form;

pub use form::{FormAction, FormManager, FormStyle, LeadCaptureForm, LeadFormConfig};
