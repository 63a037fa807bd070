pub mod alert_validator;
pub mod bitunix;
pub mod signature;
