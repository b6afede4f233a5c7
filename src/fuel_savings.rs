//! 기준 연료 소비량 대비 절감률(%)로 연료·비용 절감액을 추정한다.
use serde::Serialize;

use crate::constants::OPERATING_DAYS_PER_YEAR;

/// 절감률 기반 추정 입력.
#[derive(Debug, Clone)]
pub struct PercentSavingsInput {
    /// 기준 연료 소비량 [t/day]
    pub baseline_consumption_t_per_day: f64,
    /// 절감률 [%]
    pub saving_percent: f64,
    /// 연료 단가 [USD/t]
    pub fuel_price_per_t: f64,
}

/// 절감률 기반 추정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentSavingsResult {
    /// 일일 연료 절감량 [t/day]
    pub daily_savings_t: f64,
    /// 연간 연료 절감량 [t/년]
    pub annual_savings_t: f64,
    /// 연간 비용 절감액 [USD/년]
    pub cost_savings: f64,
}

pub fn percent_savings(input: PercentSavingsInput) -> PercentSavingsResult {
    let daily_savings_t = input.baseline_consumption_t_per_day * (input.saving_percent / 100.0);
    let annual_savings_t = daily_savings_t * OPERATING_DAYS_PER_YEAR;
    PercentSavingsResult {
        daily_savings_t,
        annual_savings_t,
        cost_savings: annual_savings_t * input.fuel_price_per_t,
    }
}
