pub mod detection_sink;
pub mod detector_config;
pub mod emotion_detector;
