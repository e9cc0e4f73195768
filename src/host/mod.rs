pub mod device;
pub mod element;
