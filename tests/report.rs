//! 기본 입력값 기준 전체 보고서 회귀 테스트.
use approx::assert_relative_eq;
use vessel_efficiency_toolbox::i18n::Translator;
use vessel_efficiency_toolbox::report::{render_text, EfficiencyReport};
use vessel_efficiency_toolbox::{BessModeKind, CiiRating, Payback, VesselInputs};

#[test]
fn default_report_matches_form_defaults() {
    let tr = Translator::new("en");
    let report = EfficiencyReport::compute(&VesselInputs::default(), &tr);

    assert_relative_eq!(report.bess.fuel_saved_t_per_day, 0.264, max_relative = 1e-9);
    assert_eq!(report.cii.before.rating, CiiRating::A);
    assert_relative_eq!(report.roi.annual_net_savings, 218_784.0, max_relative = 1e-9);
    assert!(report.eexi.compliant);
    assert_relative_eq!(report.percent_savings.cost_savings, 1_875_120.0, max_relative = 1e-12);

    let chart = report.payback_chart.as_ref().expect("payback chart");
    assert_eq!(chart.points.len(), 45);
    assert_eq!(chart.capex, 800_000.0);
    assert_eq!(chart.marker_label, "Payback: 3.66 yrs");

    assert_eq!(report.fuel_co2_chart.bars.len(), 3);
    assert_eq!(report.fuel_co2_chart.bars[0].value, 104.0);
    assert_eq!(report.fuel_co2_chart.bars[1].value, 1.28);
    assert_eq!(report.fuel_co2_chart.max_value(), 104.0);
    assert_eq!(report.eexi_chart.bars[1].label, "IMO Reference");
    assert_eq!(report.eexi_chart.bars[1].value, 16.5);
}

#[test]
fn fuel_saved_mode_changes_bess_only() {
    let tr = Translator::new("en");
    let inputs = VesselInputs {
        bess_mode: BessModeKind::FuelSavedDriven,
        ..VesselInputs::default()
    };
    let report = EfficiencyReport::compute(&inputs, &tr);
    assert_eq!(report.bess.fuel_saved_t_per_day, 1.28);
    assert_relative_eq!(report.bess.co2_saved_t_per_day, 1.28 * 3.17, max_relative = 1e-12);
    assert_eq!(
        report.roi,
        EfficiencyReport::compute(&VesselInputs::default(), &tr).roi
    );
}

#[test]
fn text_report_lists_every_section() {
    let tr = Translator::new("en");
    let text = render_text(&EfficiencyReport::compute(&VesselInputs::default(), &tr), &tr);
    assert!(text.contains("Fuel Saved: 0.26 tonnes/day"), "{text}");
    assert!(text.contains("Estimated Rating: A"));
    assert!(text.contains("Annual Net Savings (after OPEX): $218,784.00"));
    assert!(text.contains("Payback Period: 3 years"));
    assert!(text.contains("Attained EEXI: 10.68 gCO₂/ton·nm"));
    assert!(text.contains("IMO Compliant: Yes"));
    assert!(text.contains("Daily Fuel Savings: 10.40 tonnes"));
    assert!(text.contains("Estimated Annual Cost Savings: $1,875,120.00"));
}

#[test]
fn never_recovering_investment_has_no_chart() {
    let tr = Translator::new("en");
    let inputs = VesselInputs {
        fuel_saved_t_per_day: 0.0,
        ..VesselInputs::default()
    };
    let report = EfficiencyReport::compute(&inputs, &tr);
    assert_eq!(report.roi.payback, Payback::NeverRecovers);
    assert!(report.payback_chart.is_none());

    let text = render_text(&report, &tr);
    assert!(text.contains("savings never recover CAPEX"));
    assert!(!text.contains("Payback Period:"));
}

#[test]
fn korean_labels() {
    let tr = Translator::new("ko-KR");
    let text = render_text(&EfficiencyReport::compute(&VesselInputs::default(), &tr), &tr);
    assert!(text.contains("연간 순절감액 (OPEX 차감): $218,784.00"));
    assert!(text.contains("IMO 기준 충족: 예"));
}

#[test]
fn json_output_tags_payback() {
    let tr = Translator::new("en");
    let finite = serde_json::to_value(EfficiencyReport::compute(&VesselInputs::default(), &tr))
        .expect("json");
    assert_eq!(finite["roi"]["payback"]["kind"], "finite");
    assert_eq!(finite["cii"]["before"]["rating"], "A");

    let inputs = VesselInputs {
        fuel_saved_t_per_day: 0.0,
        ..VesselInputs::default()
    };
    let never = serde_json::to_value(EfficiencyReport::compute(&inputs, &tr)).expect("json");
    assert_eq!(never["roi"]["payback"]["kind"], "never_recovers");
    assert!(never["payback_chart"].is_null());
}

#[test]
fn report_with_huge_capex_keeps_chart_bounded() {
    let tr = Translator::new("en");
    let inputs = VesselInputs {
        capex: 1e30,
        ..VesselInputs::default()
    };
    let report = EfficiencyReport::compute(&inputs, &tr);
    let chart = report.payback_chart.as_ref().expect("payback chart");
    assert_eq!(chart.points.len(), 1201);
    assert!(render_text(&report, &tr).contains("Payback Period:"));
}
