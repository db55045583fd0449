pub mod playground;
pub mod records;
