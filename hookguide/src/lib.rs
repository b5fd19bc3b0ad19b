//! hookguide - markdown guide parser
//!
//! Parses a knowledge-base guide written in markdown into a nested document
//! model (parts → hook sections → content sections) and exports it as JSON
//! or HTML.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::enum_variant_names)]

pub mod guide_config;
pub mod guide_model;
pub mod loader;
pub mod presentation;

// Exporters
pub mod html_exporter;
pub mod json_exporter;

pub use guide_config::GuideConfig;
pub use guide_model::{
    parse, parse_with_markers, render_inline, ContentSection, Document, Emphasis, HookSection,
    Markers, Part, TextRun,
};
