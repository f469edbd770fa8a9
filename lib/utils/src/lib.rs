pub mod constants;
pub mod errors;
pub mod error_template;
pub mod form;
pub mod icons;
pub mod node_utils;
pub mod notification;
pub mod unpack;
pub mod widget;
