//! sacman - a pacman-style command syntax front end for systemctl
//!
//! This library provides the translation engine turning compact sacman
//! invocations such as `sacman -Styu nginx.service` into fully-formed
//! `systemctl` command lines, together with the surfaces built on top of
//! it: generated reference tables and an executing runner.
//!
//! # Modules
//!
//! - [`translator`]: The translation engine and its static decision tables
//! - [`reference`]: Reference tables generated from the decision tables
//! - [`runner`]: Process execution and exit-code handling around the engine
//! - [`config`]: Configuration loading and defaults

pub mod config;
pub mod reference;
pub mod runner;
pub mod translator;
