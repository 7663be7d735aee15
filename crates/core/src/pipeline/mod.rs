pub mod analyze_video_use_case;
pub mod drain_executor;
pub mod infrastructure;
