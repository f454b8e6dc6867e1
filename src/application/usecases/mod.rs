//! 애플리케이션 유스케이스 모음.

pub mod inspect_config;
pub mod set_launch;
pub mod show_launch;
