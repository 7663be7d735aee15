//! Emotion analysis core: bridges an asynchronous facial-emotion engine's
//! callbacks into a synchronous drain loop and serializes the collected
//! per-frame results.

pub mod bridge;
pub mod detection;
pub mod output;
pub mod pipeline;
pub mod shared;
