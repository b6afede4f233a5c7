use serde::{Deserialize, Serialize};

use crate::constants::MJ_PER_KWH;

/// 연료 절감량을 어떤 값으로부터 구할지 선택한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BessMode {
    /// 배터리 공급 에너지 × SFOC 로 절감량을 산출한다.
    BatteryDriven {
        /// 연료 소비율 [t/kWh]
        sfoc_t_per_kwh: f64,
    },
    /// 일일 연료 절감량을 직접 입력받는다.
    FuelSavedDriven {
        /// 일일 연료 절감량 [t/day]
        fuel_saved_t_per_day: f64,
    },
}

/// 설정 파일/CLI 에서 쓰는 모드 이름. 수치 파라미터 없이 종류만 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BessModeKind {
    #[default]
    BatteryDriven,
    FuelSavedDriven,
}

/// BESS 효율 계산 입력.
#[derive(Debug, Clone)]
pub struct BessEfficiencyInput {
    /// 배터리 공급 에너지 [kWh/day]
    pub battery_energy_kwh_per_day: f64,
    /// 연료 발열량 [MJ/t]
    pub fuel_energy_density_mj_per_t: f64,
    /// CO₂ 배출계수 [t CO₂ / t fuel]
    pub co2_factor: f64,
    /// 절감량 산출 방식
    pub mode: BessMode,
}

/// BESS 효율 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BessEfficiencyResult {
    /// 연료 절감량 [t/day]
    pub fuel_saved_t_per_day: f64,
    /// 절감 에너지 [MJ/day]
    pub energy_saved_mj_per_day: f64,
    /// CO₂ 절감량 [t/day]
    pub co2_saved_t_per_day: f64,
    /// 절감 에너지 / 배터리 에너지 [MJ/MJ]
    pub efficiency_ratio: f64,
}

/// 배터리 에너지(또는 입력된 절감량)로 연료·에너지·CO₂ 절감량과 효율비를 계산한다.
pub fn bess_efficiency(input: BessEfficiencyInput) -> BessEfficiencyResult {
    let fuel_saved = match input.mode {
        BessMode::BatteryDriven { sfoc_t_per_kwh } => {
            input.battery_energy_kwh_per_day * sfoc_t_per_kwh
        }
        BessMode::FuelSavedDriven {
            fuel_saved_t_per_day,
        } => fuel_saved_t_per_day,
    };
    let energy_saved = fuel_saved * input.fuel_energy_density_mj_per_t;
    let co2_saved = fuel_saved * input.co2_factor;

    let battery_mj = input.battery_energy_kwh_per_day * MJ_PER_KWH;
    let efficiency_ratio = if battery_mj != 0.0 {
        energy_saved / battery_mj
    } else {
        log::debug!("battery energy is zero; efficiency ratio defaults to 0");
        0.0
    };

    BessEfficiencyResult {
        fuel_saved_t_per_day: fuel_saved,
        energy_saved_mj_per_day: energy_saved,
        co2_saved_t_per_day: co2_saved,
        efficiency_ratio,
    }
}
