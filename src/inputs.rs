//! 선박 파라미터 묶음. 기본값은 계산기 입력 폼의 초기값과 같다.
use serde::{Deserialize, Serialize};

use crate::battery::{BessEfficiencyInput, BessMode, BessModeKind, RoiInput};
use crate::fuel_savings::PercentSavingsInput;
use crate::imo::{CiiInput, EexiInput};

/// 모든 계산기에 필요한 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselInputs {
    /// BESS 절감량 산출 방식
    pub bess_mode: BessModeKind,
    /// 배터리 공급 에너지 [kWh/day]
    pub battery_energy_kwh_per_day: f64,
    /// 연료 소비율 [t/kWh]
    pub sfoc_t_per_kwh: f64,
    /// 연료 발열량 [MJ/t]
    pub fuel_energy_density_mj_per_t: f64,
    /// CO₂ 배출계수 (BESS/CII 공용)
    pub co2_factor: f64,
    /// 일일 연료 절감량 [t/day] (FuelSavedDriven 모드, ROI, CII 보정에 사용)
    pub fuel_saved_t_per_day: f64,
    /// 연간 연료 소비량 [t/년]
    pub annual_fuel_t: f64,
    pub dwt: f64,
    /// 연간 항해거리 [NM]
    pub distance_nm: f64,
    /// 연료 단가 [USD/t]
    pub fuel_price_per_t: f64,
    /// 초기 투자비 [USD]
    pub capex: f64,
    /// 연간 운전/유지비 [USD/년]
    pub opex_per_year: f64,
    /// 주기관 출력 [kW]
    pub main_engine_power_kw: f64,
    /// 주기관 SFOC [g/kWh]
    pub main_engine_sfoc_g_per_kwh: f64,
    /// EEXI 용 CO₂ 환산계수
    pub eexi_co2_factor: f64,
    /// 기준 선속 [kn]
    pub reference_speed_kn: f64,
    /// IMO 기준 EEXI
    pub reference_eexi: f64,
    /// 절감률 [%] (입력 폼에서는 0~20)
    pub saving_percent: f64,
    /// 기준 연료 소비량 [t/day]
    pub baseline_consumption_t_per_day: f64,
}

impl Default for VesselInputs {
    fn default() -> Self {
        Self {
            bess_mode: BessModeKind::BatteryDriven,
            battery_energy_kwh_per_day: 1200.0,
            sfoc_t_per_kwh: 0.00022,
            fuel_energy_density_mj_per_t: 42700.0,
            co2_factor: 3.17,
            fuel_saved_t_per_day: 1.28,
            annual_fuel_t: 31200.0,
            dwt: 61614.0,
            distance_nm: 100_000.0,
            fuel_price_per_t: 601.0,
            capex: 800_000.0,
            opex_per_year: 12_000.0,
            main_engine_power_kw: 23_000.0,
            main_engine_sfoc_g_per_kwh: 170.0,
            eexi_co2_factor: 3.114,
            reference_speed_kn: 18.5,
            reference_eexi: 16.5,
            saving_percent: 10.0,
            baseline_consumption_t_per_day: 104.0,
        }
    }
}

impl VesselInputs {
    pub fn bess_mode(&self) -> BessMode {
        match self.bess_mode {
            BessModeKind::BatteryDriven => BessMode::BatteryDriven {
                sfoc_t_per_kwh: self.sfoc_t_per_kwh,
            },
            BessModeKind::FuelSavedDriven => BessMode::FuelSavedDriven {
                fuel_saved_t_per_day: self.fuel_saved_t_per_day,
            },
        }
    }

    pub fn bess_input(&self) -> BessEfficiencyInput {
        BessEfficiencyInput {
            battery_energy_kwh_per_day: self.battery_energy_kwh_per_day,
            fuel_energy_density_mj_per_t: self.fuel_energy_density_mj_per_t,
            co2_factor: self.co2_factor,
            mode: self.bess_mode(),
        }
    }

    pub fn cii_input(&self) -> CiiInput {
        CiiInput {
            annual_fuel_t: self.annual_fuel_t,
            co2_factor: self.co2_factor,
            dwt: self.dwt,
            distance_nm: self.distance_nm,
        }
    }

    pub fn roi_input(&self) -> RoiInput {
        RoiInput {
            fuel_saved_t_per_day: self.fuel_saved_t_per_day,
            fuel_price_per_t: self.fuel_price_per_t,
            capex: self.capex,
            opex_per_year: self.opex_per_year,
        }
    }

    pub fn eexi_input(&self) -> EexiInput {
        EexiInput {
            main_engine_power_kw: self.main_engine_power_kw,
            main_engine_sfoc_g_per_kwh: self.main_engine_sfoc_g_per_kwh,
            co2_factor: self.eexi_co2_factor,
            reference_speed_kn: self.reference_speed_kn,
            dwt: self.dwt,
            reference_eexi: self.reference_eexi,
        }
    }

    pub fn percent_savings_input(&self) -> PercentSavingsInput {
        PercentSavingsInput {
            baseline_consumption_t_per_day: self.baseline_consumption_t_per_day,
            saving_percent: self.saving_percent,
            fuel_price_per_t: self.fuel_price_per_t,
        }
    }
}
