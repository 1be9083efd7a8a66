//! Service layer for the user resource.
//! - Owns the request DTOs and turns them into validated model input.
//! - Maps model/database failures onto [`errors::ServiceError`].
//! - Every operation takes the connection explicitly; nothing is cached between calls.

pub mod errors;
pub mod user_service;
#[cfg(test)]
pub mod test_support;
