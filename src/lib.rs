//! 선박 에너지효율 지표(BESS 절감, CII, ROI, EEXI, 절감률 추정) 계산 라이브러리.
//! 계산 로직은 순수 함수로 두고 CLI 는 그 위의 얇은 출력 계층으로 둔다.

pub mod app;
pub mod battery;
pub mod charts;
pub mod config;
pub mod constants;
pub mod fuel_savings;
pub mod i18n;
pub mod imo;
pub mod inputs;
pub mod report;
pub mod ui_cli;

pub use battery::{BessMode, BessModeKind, Payback};
pub use imo::CiiRating;
pub use inputs::VesselInputs;
pub use report::EfficiencyReport;
