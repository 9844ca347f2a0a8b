// Attribute map handlers
pub mod attribute_map;
