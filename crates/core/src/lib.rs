//! Domain building blocks shared by the persistence and HTTP layers.
//!
//! Nothing in here touches the database or the network: identifier and
//! timestamp aliases, the domain error type, field validation rules, and the
//! entity projector that shapes records into API responses.

pub mod error;
pub mod projection;
pub mod status;
pub mod types;
pub mod validation;
