//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, per-call random salt)
//! - Cookie construction and extraction
//! - Small cryptographic helpers (random bytes)

pub mod cookie;
pub mod crypto;
pub mod password;
