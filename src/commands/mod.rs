pub mod convert;
pub mod preview;
