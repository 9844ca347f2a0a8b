pub mod attribute_map;
pub mod error_response;
