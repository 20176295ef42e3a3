//! pgmt - Pixel Game Maker project translator
//!
//! pgmt is a CLI tool and library that translates the localizable strings of
//! a Pixel Game Maker `project.json`, registers the new language with the
//! game, and optionally minifies the file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (flags, pipeline, reporting)
//! - `config`: Configuration file loading and parsing
//! - `localization`: The text list, its walk, and locale codes
//! - `project`: Loading, locating nodes in, and saving `project.json`
//! - `translate`: Translation engines and the translation pass

pub mod cli;
pub mod config;
pub mod localization;
pub mod project;
pub mod translate;
