pub mod constants;
pub mod detection_event;
pub mod face_state;
pub mod result_collection;
