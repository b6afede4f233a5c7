use serde::Serialize;

use crate::constants::{MONTHS_PER_YEAR, OPERATING_DAYS_PER_YEAR};

/// 투자 회수 여부. 순절감액이 0 이하이면 회수 불가로 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum Payback {
    /// 단순 회수기간 [년]
    Finite(f64),
    /// 절감액으로 초기 투자비를 회수할 수 없음
    NeverRecovers,
}

impl Payback {
    /// 회수기간 [년]. 회수 불가이면 None.
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Finite(years) => Some(*years),
            Payback::NeverRecovers => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Payback::Finite(_))
    }
}

/// 배터리 개조 ROI 계산 입력.
#[derive(Debug, Clone)]
pub struct RoiInput {
    /// 일일 연료 절감량 [t/day]
    pub fuel_saved_t_per_day: f64,
    /// 연료 단가 [USD/t]
    pub fuel_price_per_t: f64,
    /// 초기 투자비 [USD]
    pub capex: f64,
    /// 연간 운전/유지비 [USD/년]
    pub opex_per_year: f64,
}

/// ROI 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiResult {
    /// OPEX 차감 후 연간 순절감액 [USD/년]
    pub annual_net_savings: f64,
    /// 단순 회수기간
    pub payback: Payback,
}

/// 연료 절감액에서 OPEX 를 뺀 순절감액과 단순 회수기간을 계산한다.
pub fn roi(input: RoiInput) -> RoiResult {
    let daily_net = input.fuel_saved_t_per_day * input.fuel_price_per_t
        - input.opex_per_year / OPERATING_DAYS_PER_YEAR;
    if daily_net <= 0.0 {
        log::warn!(
            "daily net savings {daily_net:.2} <= 0; capex {:.2} is never recovered",
            input.capex
        );
        return RoiResult {
            annual_net_savings: 0.0,
            payback: Payback::NeverRecovers,
        };
    }
    let annual_net_savings = daily_net * OPERATING_DAYS_PER_YEAR;
    RoiResult {
        annual_net_savings,
        payback: Payback::Finite(input.capex / annual_net_savings),
    }
}

/// 누적 절감액 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaybackPoint {
    /// 경과 시간 [년]
    pub time_years: f64,
    /// 누적 순절감액 [USD]
    pub cumulative_savings: f64,
    /// 비교용 초기 투자비 [USD]
    pub capex: f64,
}

/// 회수 곡선의 마지막 표본 월 상한 (100년).
pub const MAX_PAYBACK_SERIES_MONTHS: u64 = 1200;

/// 월 단위 누적 절감액 곡선을 만든다.
///
/// 차트가 원점에서 시작하도록 0개월 점을 일부러 추가한다. 0개월부터 회수 시점을
/// 포함하는 달의 다음 달까지 표본을 찍으므로 점 개수는 `floor(회수기간 × 12) + 2` 이고
/// 마지막 점은 회수 시점 이후다.
/// 단, 마지막 표본 월은 [`MAX_PAYBACK_SERIES_MONTHS`] 에서 잘리므로 회수기간이
/// 100년을 넘으면 곡선은 최대 1201개 점에서 끝나고 회수 시점에 닿지 않는다.
/// 회수 불가이거나 회수기간이 NaN 이면 None.
pub fn payback_series(roi: &RoiResult, capex: f64) -> Option<Vec<PaybackPoint>> {
    let years = roi.payback.years()?;
    let months = (years * MONTHS_PER_YEAR).floor();
    if months.is_nan() {
        return None;
    }
    let cap = MAX_PAYBACK_SERIES_MONTHS as f64;
    if months + 1.0 > cap {
        log::debug!("payback {years:.2} years exceeds series cap; truncating at {cap} months");
    }
    // months 는 [0, cap - 1] 로 잘라낸 뒤에만 정수로 바꾼다.
    let last_month = (months.clamp(0.0, cap - 1.0) as u64).saturating_add(1);
    let points = (0..=last_month)
        .map(|m| {
            let time_years = m as f64 / MONTHS_PER_YEAR;
            PaybackPoint {
                time_years,
                cumulative_savings: roi.annual_net_savings * time_years,
                capex,
            }
        })
        .collect();
    Some(points)
}
