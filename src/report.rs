//! 입력 폼의 "결과 계산" 동작에 해당하는 일괄 계산과 텍스트 출력.
use serde::Serialize;

use crate::battery::{bess_efficiency, roi, BessEfficiencyResult, Payback, RoiResult};
use crate::charts::{eexi_chart, fuel_co2_chart, payback_chart, BarChart, PaybackChart};
use crate::fuel_savings::{percent_savings, PercentSavingsResult};
use crate::i18n::{keys, Translator};
use crate::imo::{cii_before_after, eexi, CiiComparison, EexiResult};
use crate::inputs::VesselInputs;

/// 모든 지표의 계산 결과와 차트 데이터.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyReport {
    pub bess: BessEfficiencyResult,
    pub cii: CiiComparison,
    pub roi: RoiResult,
    pub payback_chart: Option<PaybackChart>,
    pub eexi: EexiResult,
    pub percent_savings: PercentSavingsResult,
    pub fuel_co2_chart: BarChart,
    pub eexi_chart: BarChart,
}

impl EfficiencyReport {
    /// 입력값 한 벌로 여섯 가지 계산을 모두 수행한다.
    pub fn compute(inputs: &VesselInputs, tr: &Translator) -> Self {
        log::debug!("computing efficiency report with mode {:?}", inputs.bess_mode);
        let bess = bess_efficiency(inputs.bess_input());
        let cii = cii_before_after(inputs.cii_input(), inputs.fuel_saved_t_per_day);
        let roi = roi(inputs.roi_input());
        let payback_chart = payback_chart(&roi, inputs.capex, tr);
        let eexi = eexi(inputs.eexi_input());
        let percent_savings = percent_savings(inputs.percent_savings_input());
        let fuel_co2_chart = fuel_co2_chart(
            inputs.baseline_consumption_t_per_day,
            inputs.fuel_saved_t_per_day,
            &bess,
            tr,
        );
        let eexi_chart = eexi_chart(&eexi, tr);
        Self {
            bess,
            cii,
            roi,
            payback_chart,
            eexi,
            percent_savings,
            fuel_co2_chart,
            eexi_chart,
        }
    }
}

/// 전체 보고서를 사람이 읽는 텍스트로 만든다.
pub fn render_text(report: &EfficiencyReport, tr: &Translator) -> String {
    [
        render_bess(&report.bess, tr),
        render_cii(&report.cii, tr),
        render_roi(&report.roi, tr),
        render_eexi(&report.eexi, tr),
        render_percent_savings(&report.percent_savings, tr),
    ]
    .join("\n")
}

pub fn render_bess(bess: &BessEfficiencyResult, tr: &Translator) -> String {
    let mut out = heading(tr.t(keys::BESS_HEADING));
    line(
        &mut out,
        tr.t(keys::BESS_FUEL_SAVED),
        format!("{:.2} tonnes/day", bess.fuel_saved_t_per_day),
    );
    line(
        &mut out,
        tr.t(keys::BESS_ENERGY_SAVED),
        format!("{:.2} MJ/day", bess.energy_saved_mj_per_day),
    );
    line(
        &mut out,
        tr.t(keys::BESS_CO2_SAVED),
        format!("{:.2} tonnes/day", bess.co2_saved_t_per_day),
    );
    line(
        &mut out,
        tr.t(keys::BESS_EFFICIENCY_RATIO),
        format!("{:.2} MJ/MJ", bess.efficiency_ratio),
    );
    out
}

pub fn render_cii(cii: &CiiComparison, tr: &Translator) -> String {
    let mut out = heading(tr.t(keys::CII_HEADING));
    line(&mut out, tr.t(keys::CII_ATTAINED), format!("{:.6} gCO₂/DWT·nm", cii.before.attained));
    line(&mut out, tr.t(keys::CII_RATING), cii.before.rating.to_string());
    line(
        &mut out,
        tr.t(keys::CII_ATTAINED_WITH_BESS),
        format!("{:.6} gCO₂/DWT·nm", cii.after.attained),
    );
    line(&mut out, tr.t(keys::CII_RATING_WITH_BESS), cii.after.rating.to_string());
    out
}

pub fn render_roi(roi: &RoiResult, tr: &Translator) -> String {
    let mut out = heading(tr.t(keys::ROI_HEADING));
    line(&mut out, tr.t(keys::ROI_ANNUAL_SAVINGS), format_currency(roi.annual_net_savings));
    match roi.payback {
        Payback::Finite(years) => line(
            &mut out,
            tr.t(keys::ROI_PAYBACK),
            format!("{} {}", years.trunc(), tr.t(keys::ROI_YEARS)),
        ),
        Payback::NeverRecovers => {
            out.push_str(tr.t(keys::ROI_NEVER_RECOVERS));
            out.push('\n');
        }
    }
    out
}

pub fn render_eexi(eexi: &EexiResult, tr: &Translator) -> String {
    let mut out = heading(tr.t(keys::EEXI_HEADING));
    line(&mut out, tr.t(keys::EEXI_ATTAINED), format!("{:.2} gCO₂/ton·nm", eexi.attained));
    line(&mut out, tr.t(keys::EEXI_COMPLIANT), tr.yes_no(eexi.compliant).to_string());
    out
}

pub fn render_percent_savings(savings: &PercentSavingsResult, tr: &Translator) -> String {
    let mut out = heading(tr.t(keys::SAVINGS_HEADING));
    line(&mut out, tr.t(keys::SAVINGS_DAILY), format!("{:.2} tonnes", savings.daily_savings_t));
    line(&mut out, tr.t(keys::SAVINGS_ANNUAL), format!("{:.2} tonnes", savings.annual_savings_t));
    line(&mut out, tr.t(keys::SAVINGS_COST), format_currency(savings.cost_savings));
    out
}

/// 회수 그래프 데이터를 표 형태로 출력한다.
pub fn render_payback_chart(chart: &PaybackChart, tr: &Translator) -> String {
    let mut out = heading(tr.t(keys::ROI_SERIES_HEADING));
    out.push_str(&format!(
        "{:>8} {:>16} {:>16}\n",
        chart.x_label,
        tr.t(keys::CHART_PAYBACK_CUMULATIVE),
        tr.t(keys::CHART_PAYBACK_CAPEX)
    ));
    for p in &chart.points {
        out.push_str(&format!(
            "{:>8.3} {:>16.2} {:>16.2}\n",
            p.time_years, p.cumulative_savings, p.capex
        ));
    }
    out.push_str(&chart.marker_label);
    out.push('\n');
    out
}

fn heading(title: &str) -> String {
    format!("== {title} ==\n")
}

fn line(out: &mut String, label: &str, value: String) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&value);
    out.push('\n');
}

/// 달러 표기 (천 단위 구분, 소수 둘째 자리). 예: 218784 → "$218,784.00"
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(218_784.0), "$218,784.00");
        assert_eq!(format_currency(1_875_120.0), "$1,875,120.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn currency_keeps_sign() {
        assert_eq!(format_currency(-1234.567), "-$1,234.57");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
