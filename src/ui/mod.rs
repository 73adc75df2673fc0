pub mod attachment;
pub mod badges;
pub mod chat;
pub mod style;
