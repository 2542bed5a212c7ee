//! Shared, platform-independent pieces of the UrbanFix front-end.
//!
//! Everything in here compiles natively and carries no browser APIs, so the
//! wire models, validation rules and the two client-side state machines
//! (session guard and upload workflow) can be exercised with `cargo test`.
//! The `frontend` crate supplies the browser side: HTTP over `gloo-net`,
//! storage over `gloo-storage`, geolocation and rendering.

pub mod error;
pub mod forms;
pub mod model;
pub mod notice;
pub mod requests;
pub mod session;
pub mod tracking;
pub mod validation;
pub mod workflow;
