pub mod breaks;
pub mod session;
