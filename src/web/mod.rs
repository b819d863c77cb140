//! Web interface: the entry form, review panel and spreadsheet download served
//! over HTTP.

pub mod error;
pub mod handlers;
pub mod html;
pub mod routes;
pub mod server;
pub mod state;

pub use error::WebError;
pub use server::{build_router, run_server, ServerConfig};
pub use state::WebAppState;
