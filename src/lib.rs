//! Rafiq - Behavioral nudges and scripted career-assistant dialogues
//!
//! This crate scores which next action a job seeker should take and walks
//! them through a scripted conversation for that action.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
