pub mod bridge_sink;
pub mod producer_status;
pub mod result_bridge;
