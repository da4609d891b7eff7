//! Service layer: auth/session logic independent of HTTP concerns.

pub mod session;
