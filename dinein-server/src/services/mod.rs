//! 服务模块

pub mod media;

pub use media::MediaService;
