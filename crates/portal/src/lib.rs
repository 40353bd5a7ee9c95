//! Clubdesk Portal - the page engine behind the member, payment, and
//! dashboard pages.
//!
//! Every page runs the same cycle: read the form into a plain record,
//! persist the record under a fixed key in the per-key JSON store, and
//! re-render the page's list view from storage. The engine is split along
//! those seams:
//!
//! - [`storage`] - per-key JSON persistence with silent fallback on
//!   missing or malformed data
//! - [`stores`] - typed repositories, one per record kind
//! - [`dom`] - the host-document model the pages bind to (forms, list
//!   containers, notices)
//! - [`form`] - declarative field schemas and the collect/fill binder
//! - [`render`] - askama-templated list rendering with uniform HTML
//!   escaping
//! - [`pages`] - the three page controllers and the shared startup routine
//!
//! The engine is single-threaded and event-driven: all work happens as a
//! reaction to one host event at a time (page load, submit, click), and
//! every mutation re-reads storage before writing.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod dom;
pub mod error;
pub mod filters;
pub mod form;
pub mod models;
pub mod pages;
pub mod render;
pub mod storage;
pub mod stores;
