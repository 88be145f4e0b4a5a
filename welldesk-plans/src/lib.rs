//! Plan documents for the Welldesk portal.
//!
//! - Append-only plan history per client (last row in table order wins),
//! - a client for the external text-generation service, degrading
//!   failures to inline text,
//! - outbound deep-link construction for chat and email handoff.

pub mod error;
pub mod generate;
pub mod outreach;
pub mod repository;

pub use error::{PlanError, PlanResult};
pub use generate::{build_plan_prompt, GenerateClient, GenerateConfig};
pub use repository::PlanRepository;
