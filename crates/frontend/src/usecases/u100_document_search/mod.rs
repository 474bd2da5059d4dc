//! Document Search UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: chat messages, status banners, upload summary
//! - api.rs: DocumentApi trait and its HTTP implementation
//! - controller.rs: DocSearchController with the page operations
//! - view_model.rs: DocSearchVm with RwSignals
//! - view.rs: Main component DocSearchPage
//! - upload_panel.rs, chat_panel.rs, message_bubble.rs: sub-components

pub mod api;
mod chat_panel;
pub mod controller;
mod message_bubble;
pub mod model;
mod upload_panel;
mod view;
mod view_model;

pub use view::DocSearchPage;
pub use view_model::DocSearchVm;
