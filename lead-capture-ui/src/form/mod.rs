pub mod actions;
pub mod client;
pub mod manager;
pub mod state;
pub mod widget;


pub use actions::FormAction;
pub use client::SubmitClient;
pub use manager::{FormManager, LeadFormConfig};
pub use state::FormState;
pub use widget::{FormStyle, LeadCaptureForm};
