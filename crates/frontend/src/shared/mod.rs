pub mod api_utils;
pub mod components;
pub mod config;
pub mod fetch;
pub mod icons;
pub mod page_frame;
