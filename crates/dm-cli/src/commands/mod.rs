pub mod dispatch;
pub mod keywords;
pub mod papp;
pub mod report;
pub mod schema;
pub mod sentiment;
pub mod shared;
pub mod validate;
