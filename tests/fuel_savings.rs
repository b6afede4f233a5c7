use approx::assert_relative_eq;
use vessel_efficiency_toolbox::fuel_savings::{percent_savings, PercentSavingsInput};

#[test]
fn percent_model_reference_case() {
    let input = PercentSavingsInput {
        baseline_consumption_t_per_day: 104.0,
        saving_percent: 10.0,
        fuel_price_per_t: 601.0,
    };
    let res = percent_savings(input.clone());
    assert_relative_eq!(res.daily_savings_t, 10.4, max_relative = 1e-12);
    assert_relative_eq!(res.annual_savings_t, 3120.0, max_relative = 1e-12);
    assert_relative_eq!(res.cost_savings, 1_875_120.0, max_relative = 1e-12);
    assert_eq!(res, percent_savings(input));
}

#[test]
fn percent_model_accepts_any_percentage() {
    let res = percent_savings(PercentSavingsInput {
        baseline_consumption_t_per_day: 50.0,
        saving_percent: 150.0,
        fuel_price_per_t: 2.0,
    });
    assert_relative_eq!(res.daily_savings_t, 75.0, max_relative = 1e-12);
    assert_relative_eq!(res.cost_savings, 75.0 * 300.0 * 2.0, max_relative = 1e-12);

    let zero = percent_savings(PercentSavingsInput {
        baseline_consumption_t_per_day: 104.0,
        saving_percent: 0.0,
        fuel_price_per_t: 601.0,
    });
    assert_eq!(zero.cost_savings, 0.0);
}
