//! 배터리(BESS) 개조에 따른 연료 절감 효과와 투자 경제성 계산 모듈.

pub mod bess_efficiency;
pub mod economics;

pub use bess_efficiency::*;
pub use economics::*;
