//! Atelier - Interior Design Studio Backend
//!
//! This crate implements the public website backend for the Atelier studio:
//! team and portfolio content APIs, image uploads, and a rule-based
//! consultation chatbot mirrored over HTTP and WebSocket transports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
