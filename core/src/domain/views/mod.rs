//! Client-side request lifecycles of the three tabs.
//!
//! The views hold no reference to the services. The front-end calls
//! `begin_*`, runs the gateway operation wherever it likes, and hands the
//! outcome back through `finish`/`receive`.

pub mod chat;
pub mod plan;
pub mod request_state;
pub mod scan;

pub use chat::ChatView;
pub use plan::PlanView;
pub use request_state::{RequestFailure, RequestState};
pub use scan::ScanView;
