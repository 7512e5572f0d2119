pub mod details;
pub mod list;
pub mod permission_editor;
