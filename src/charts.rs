//! 결과 화면의 차트 데이터. 그리기는 표시 계층이 담당하고 여기서는 값과 라벨만 만든다.
use serde::Serialize;

use crate::battery::{payback_series, BessEfficiencyResult, PaybackPoint, RoiResult};
use crate::i18n::{keys, Translator};
use crate::imo::EexiResult;

/// 누적 절감액 vs CAPEX 선 그래프.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaybackChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<PaybackPoint>,
    /// 회수 시점 표시선 위치 [년]
    pub payback_years: f64,
    /// CAPEX 수평 기준선 [USD]
    pub capex: f64,
    /// 회수 시점 주석 (예: "Payback: 3.66 yrs")
    pub marker_label: String,
}

/// 회수 가능한 경우에만 회수 그래프 데이터를 만든다.
pub fn payback_chart(roi: &RoiResult, capex: f64, tr: &Translator) -> Option<PaybackChart> {
    let payback_years = roi.payback.years()?;
    let points = payback_series(roi, capex)?;
    Some(PaybackChart {
        title: tr.t(keys::CHART_PAYBACK_TITLE).to_string(),
        x_label: tr.t(keys::CHART_PAYBACK_X).to_string(),
        y_label: tr.t(keys::CHART_PAYBACK_Y).to_string(),
        points,
        payback_years,
        capex,
        marker_label: format!("{}: {payback_years:.2} yrs", tr.t(keys::CHART_PAYBACK_MARKER)),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// 라벨이 붙은 막대 그래프.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    fn new(title: &str, y_label: &str, bars: Vec<(&str, f64)>) -> Self {
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            bars: bars
                .into_iter()
                .map(|(label, value)| Bar {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        }
    }

    /// 가장 큰 막대 값. 막대가 없으면 0.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// 기존 연료 사용량, 연료 절감량, CO₂ 절감량 비교 막대.
pub fn fuel_co2_chart(
    baseline_consumption_t_per_day: f64,
    fuel_saved_t_per_day: f64,
    bess: &BessEfficiencyResult,
    tr: &Translator,
) -> BarChart {
    BarChart::new(
        tr.t(keys::CHART_FUEL_TITLE),
        tr.t(keys::CHART_FUEL_Y),
        vec![
            (tr.t(keys::CHART_FUEL_ORIGINAL), baseline_consumption_t_per_day),
            (tr.t(keys::CHART_FUEL_SAVED), fuel_saved_t_per_day),
            (tr.t(keys::CHART_FUEL_CO2), bess.co2_saved_t_per_day),
        ],
    )
}

/// 달성 EEXI 와 IMO 기준값 비교 막대.
pub fn eexi_chart(eexi: &EexiResult, tr: &Translator) -> BarChart {
    BarChart::new(
        tr.t(keys::CHART_EEXI_TITLE),
        tr.t(keys::CHART_EEXI_Y),
        vec![
            (tr.t(keys::CHART_EEXI_ATTAINED), eexi.attained),
            (tr.t(keys::CHART_EEXI_REFERENCE), eexi.reference),
        ],
    )
}
