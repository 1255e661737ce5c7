// Content strategy: pre-publication prediction, improvement guidance,
// calendar planning, theme suggestion, and the pluggable trend source.

pub mod calendar;
pub mod handlers;
pub mod improvements;
pub mod prediction;
pub mod themes;
pub mod trends;
