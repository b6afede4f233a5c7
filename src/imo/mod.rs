//! IMO 온실가스 규제 지표(CII, EEXI) 계산 모듈.

pub mod cii;
pub mod eexi;

pub use cii::*;
pub use eexi::*;
