//! Domain layer
//! launch.json 문서/비교 규칙을 외부 의존성(파일/환경변수) 없이 표현한다.

pub mod diff;
pub mod error;
pub mod launch;
pub mod params;
