//! Weighted-merit trust scoring for cloud service providers.
//!
//! A [`scoring::MetricRegistry`] is evaluated against a
//! [`scoring::SuccessRatioProvider`] to produce an aggregate trust score and the
//! data-classification band it qualifies for. Loading definitions and rendering
//! reports live in [`import`] and [`report`] so the scoring modules stay free of I/O.

pub mod config;
pub mod error;
pub mod import;
pub mod report;
pub mod scoring;
pub mod telemetry;
