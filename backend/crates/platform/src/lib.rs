//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, optional pepper)
//! - Bearer token header extraction
//! - HTTP object storage client

pub mod bearer;
pub mod password;
pub mod storage;
