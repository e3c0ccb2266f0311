//! # clinicsite-renderer
//!
//! Tera-based template engine that renders the clinic page from loaded
//! site content.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use clinicsite_renderer::{Engine, SiteContext};
//!
//! fn render_page(welcome: String, staff: Vec<clinicsite_core::StaffMember>) {
//!     let ctx = SiteContext::assemble_now(welcome, staff);
//!     if let Ok(engine) = Engine::from_template_file(Path::new("templates/index.html.tera")) {
//!         if let Ok(html) = engine.render(&ctx) {
//!             println!("{} bytes", html.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::SiteContext;
pub use engine::Engine;
pub use error::RenderError;
