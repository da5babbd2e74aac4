pub mod channel;
pub mod clip;
pub mod decode;
pub mod quantize;
pub mod resample;
