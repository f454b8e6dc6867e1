//! Infrastructure layer
//! 외부 시스템(파일시스템/환경변수/콘솔)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod snapshot;
