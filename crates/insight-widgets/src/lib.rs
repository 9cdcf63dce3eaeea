#![forbid(unsafe_code)]

//! Stateful components for InSight screens.
//!
//! [`pull_up_panel`] is the heart of the home screen. The remaining modules
//! hold the sample data and small state machines the other screens render.

pub mod bar_chart;
pub mod calendar;
pub mod forms;
pub mod gradient;
pub mod memo;
pub mod menu;
pub mod pull_up_panel;
pub mod schedule;

pub use pull_up_panel::{
    PanelContent, PanelMotion, PanelPhase, PanelState, PullUpPanel, PullUpPanelController,
};
