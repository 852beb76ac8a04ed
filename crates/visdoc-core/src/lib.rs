//! Visdoc Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Visdoc
//! documentation pipeline. It includes:
//!
//! - **Documents**: The structured record produced by extraction ([`document`] module)
//! - **Profiles**: Documentation styles controlling optional blocks ([`profile::Profile`])
//! - **Diagrams**: Diagram kinds and typed diagram elements ([`diagram`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod diagram;
pub mod document;
pub mod profile;
