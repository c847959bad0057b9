pub mod cmake;
pub mod list;
pub mod show;
