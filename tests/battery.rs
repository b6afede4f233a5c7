//! BESS 절감량, ROI, 회수 곡선 회귀 테스트.
use approx::assert_relative_eq;
use vessel_efficiency_toolbox::battery::{
    bess_efficiency, payback_series, roi, BessEfficiencyInput, BessMode, Payback, RoiInput,
    MAX_PAYBACK_SERIES_MONTHS,
};

fn battery_input(kwh: f64, mode: BessMode) -> BessEfficiencyInput {
    BessEfficiencyInput {
        battery_energy_kwh_per_day: kwh,
        fuel_energy_density_mj_per_t: 42_700.0,
        co2_factor: 3.17,
        mode,
    }
}

#[test]
fn battery_driven_savings_follow_sfoc() {
    let res = bess_efficiency(battery_input(
        1200.0,
        BessMode::BatteryDriven {
            sfoc_t_per_kwh: 0.00022,
        },
    ));
    assert_relative_eq!(res.fuel_saved_t_per_day, 1200.0 * 0.00022, max_relative = 1e-12);
    assert_relative_eq!(res.energy_saved_mj_per_day, 0.264 * 42_700.0, max_relative = 1e-9);
    assert_relative_eq!(res.co2_saved_t_per_day, 0.264 * 3.17, max_relative = 1e-9);
    assert_relative_eq!(res.efficiency_ratio, 2.609_444_444, max_relative = 1e-8);
}

#[test]
fn fuel_saved_driven_uses_supplied_value() {
    let res = bess_efficiency(battery_input(
        1200.0,
        BessMode::FuelSavedDriven {
            fuel_saved_t_per_day: 1.28,
        },
    ));
    assert_eq!(res.fuel_saved_t_per_day, 1.28);
    assert_relative_eq!(res.energy_saved_mj_per_day, 1.28 * 42_700.0, max_relative = 1e-12);
    assert_relative_eq!(res.co2_saved_t_per_day, 1.28 * 3.17, max_relative = 1e-12);
    assert_relative_eq!(
        res.efficiency_ratio,
        1.28 * 42_700.0 / (1200.0 * 3.6),
        max_relative = 1e-12
    );
}

#[test]
fn zero_battery_energy_gives_zero_ratio() {
    let driven = bess_efficiency(battery_input(
        0.0,
        BessMode::BatteryDriven {
            sfoc_t_per_kwh: 0.00022,
        },
    ));
    assert_eq!(driven.efficiency_ratio, 0.0);
    assert_eq!(driven.fuel_saved_t_per_day, 0.0);

    let supplied = bess_efficiency(battery_input(
        0.0,
        BessMode::FuelSavedDriven {
            fuel_saved_t_per_day: 2.0,
        },
    ));
    assert_eq!(supplied.efficiency_ratio, 0.0);
    assert!(supplied.energy_saved_mj_per_day > 0.0);
}

fn reference_roi_input() -> RoiInput {
    RoiInput {
        fuel_saved_t_per_day: 1.28,
        fuel_price_per_t: 601.0,
        capex: 800_000.0,
        opex_per_year: 12_000.0,
    }
}

#[test]
fn roi_reference_case() {
    let res = roi(reference_roi_input());
    assert_relative_eq!(res.annual_net_savings, 218_784.0, max_relative = 1e-9);
    let years = res.payback.years().expect("finite payback");
    assert_relative_eq!(years, 800_000.0 / 218_784.0, max_relative = 1e-9);
    assert!((years - 3.657).abs() < 1e-3);
}

#[test]
fn roi_without_savings_never_recovers() {
    let res = roi(RoiInput {
        fuel_saved_t_per_day: 0.0,
        ..reference_roi_input()
    });
    assert_eq!(res.annual_net_savings, 0.0);
    assert_eq!(res.payback, Payback::NeverRecovers);
    assert!(payback_series(&res, 800_000.0).is_none());
}

#[test]
fn roi_break_even_day_never_recovers() {
    // 1 t/d × 40 USD/t 절감 = OPEX 12000/300 → 순절감 0
    let res = roi(RoiInput {
        fuel_saved_t_per_day: 1.0,
        fuel_price_per_t: 40.0,
        capex: 1.0,
        opex_per_year: 12_000.0,
    });
    assert!(!res.payback.is_finite());
}

#[test]
fn payback_series_covers_payback_point() {
    let res = roi(reference_roi_input());
    let series = payback_series(&res, 800_000.0).expect("series");
    assert_eq!(series.len(), 45);

    let first = series.first().expect("first");
    assert_eq!(first.time_years, 0.0);
    assert_eq!(first.cumulative_savings, 0.0);

    let last = series.last().expect("last");
    assert_relative_eq!(last.time_years, 44.0 / 12.0, max_relative = 1e-12);
    assert!(last.time_years >= res.payback.years().unwrap_or_default());
    assert!(last.cumulative_savings >= 800_000.0);
    assert!(series.iter().all(|p| p.capex == 800_000.0));
    assert!(series
        .windows(2)
        .all(|w| w[1].cumulative_savings > w[0].cumulative_savings));
}

#[test]
fn zero_capex_series_has_two_points() {
    let res = roi(RoiInput {
        capex: 0.0,
        ..reference_roi_input()
    });
    assert_eq!(res.payback, Payback::Finite(0.0));
    let series = payback_series(&res, 0.0).expect("series");
    assert_eq!(series.len(), 2);
}

#[test]
fn calculators_are_repeatable() {
    let mode = BessMode::BatteryDriven {
        sfoc_t_per_kwh: 0.00022,
    };
    assert_eq!(
        bess_efficiency(battery_input(1200.0, mode)),
        bess_efficiency(battery_input(1200.0, mode))
    );
    assert_eq!(roi(reference_roi_input()), roi(reference_roi_input()));
}

#[test]
fn huge_capex_series_is_truncated_at_cap() {
    let res = roi(RoiInput {
        capex: 1e30,
        ..reference_roi_input()
    });
    assert!(res.payback.years().expect("finite payback") > 1e18);
    let series = payback_series(&res, 1e30).expect("series");
    assert_eq!(series.len() as u64, MAX_PAYBACK_SERIES_MONTHS + 1);
    let last = series.last().expect("last");
    assert_relative_eq!(last.time_years, 100.0, max_relative = 1e-12);
    assert!(series.iter().all(|p| p.capex == 1e30));
}

#[test]
fn long_payback_series_stays_bounded() {
    // capex 1e11 → 회수기간 약 457,000년
    let res = roi(RoiInput {
        capex: 1e11,
        ..reference_roi_input()
    });
    let series = payback_series(&res, 1e11).expect("series");
    assert_eq!(series.len(), 1201);

    // 상한 바로 아래에서는 원래 길이 규칙을 따른다: 99.9년 → floor(1198.8) + 2
    let years = 99.9;
    let within = roi(RoiInput {
        capex: 218_784.0 * years,
        ..reference_roi_input()
    });
    let series = payback_series(&within, 218_784.0 * years).expect("series");
    assert_eq!(series.len(), 1200);
    assert!(series.last().expect("last").time_years >= years);
}
