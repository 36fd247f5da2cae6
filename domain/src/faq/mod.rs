//! FAQ subdomain
//!
//! - [`entities`]: [`FaqItem`](entities::FaqItem) and [`FaqResult`](entities::FaqResult),
//!   the output of consolidation
//! - [`schema`]: the structured-output schema handed to the generator
//! - [`parsing`]: validation of generator output into a `FaqResult`
//! - [`stored`]: FAQs published to the durable store

pub mod entities;
pub mod parsing;
pub mod schema;
pub mod stored;
