//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate calculation primitives into meeting-level use-cases.
//! - Keep UI/timer layers decoupled from calculation details.

pub mod meeting_service;
