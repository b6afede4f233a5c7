use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::app::AppError;
use crate::battery::{self, BessModeKind};
use crate::charts;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::fuel_savings;
use crate::i18n::{keys, Translator};
use crate::imo;
use crate::inputs::VesselInputs;
use crate::report::{self, EfficiencyReport};

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Maritime energy-efficiency calculator: BESS savings, CII, ROI, EEXI"
)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 출력 언어 (auto, ko, en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,

    /// 출력 형식
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute every metric
    Report(InputOverrides),
    /// BESS fuel, energy and CO₂ savings
    Bess(InputOverrides),
    /// Carbon Intensity Indicator before and after BESS
    Cii(InputOverrides),
    /// Retrofit ROI, payback period and payback series
    Roi(InputOverrides),
    /// Energy Efficiency Existing Ship Index
    Eexi(InputOverrides),
    /// Percent-based fuel and cost savings
    Savings(InputOverrides),
    /// Write the effective configuration to --config
    InitConfig(InputOverrides),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// fuel saved = battery energy × SFOC
    Battery,
    /// fuel saved taken from --fuel-saved-t-per-day
    FuelSaved,
}

impl From<ModeArg> for BessModeKind {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Battery => BessModeKind::BatteryDriven,
            ModeArg::FuelSaved => BessModeKind::FuelSavedDriven,
        }
    }
}

/// 설정 파일 값 위에 덮어쓸 입력값. 지정하지 않은 항목은 설정값을 그대로 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct InputOverrides {
    /// BESS savings mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Battery energy [kWh/day]
    #[arg(long)]
    pub battery_energy_kwh_per_day: Option<f64>,
    /// Specific fuel oil consumption [t/kWh]
    #[arg(long)]
    pub sfoc_t_per_kwh: Option<f64>,
    /// Fuel energy density [MJ/t]
    #[arg(long)]
    pub fuel_energy_density_mj_per_t: Option<f64>,
    /// CO₂ emission factor
    #[arg(long)]
    pub co2_factor: Option<f64>,
    /// Daily fuel saved [t/day]
    #[arg(long)]
    pub fuel_saved_t_per_day: Option<f64>,
    /// Annual fuel consumption [t]
    #[arg(long)]
    pub annual_fuel_t: Option<f64>,
    /// Deadweight tonnage
    #[arg(long)]
    pub dwt: Option<f64>,
    /// Annual distance sailed [NM]
    #[arg(long)]
    pub distance_nm: Option<f64>,
    /// Fuel price [USD/t]
    #[arg(long)]
    pub fuel_price_per_t: Option<f64>,
    /// Capital expenditure [USD]
    #[arg(long)]
    pub capex: Option<f64>,
    /// Operating expenditure [USD/year]
    #[arg(long)]
    pub opex_per_year: Option<f64>,
    /// Main engine power [kW]
    #[arg(long)]
    pub main_engine_power_kw: Option<f64>,
    /// Main engine SFOC [g/kWh]
    #[arg(long)]
    pub main_engine_sfoc_g_per_kwh: Option<f64>,
    /// CO₂ conversion factor for EEXI
    #[arg(long)]
    pub eexi_co2_factor: Option<f64>,
    /// Reference speed [kn]
    #[arg(long)]
    pub reference_speed_kn: Option<f64>,
    /// IMO reference EEXI
    #[arg(long)]
    pub reference_eexi: Option<f64>,
    /// Saving percentage [%]
    #[arg(long)]
    pub saving_percent: Option<f64>,
    /// Baseline daily fuel consumption [t/day]
    #[arg(long)]
    pub baseline_consumption_t_per_day: Option<f64>,
}

macro_rules! apply_overrides {
    ($src:expr, $dst:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(v) = $src.$field {
                $dst.$field = v;
            }
        )+
    };
}

impl InputOverrides {
    /// 지정된 항목만 덮어쓴 입력값을 만든다.
    pub fn apply(&self, base: &VesselInputs) -> VesselInputs {
        let mut inputs = base.clone();
        if let Some(mode) = self.mode {
            inputs.bess_mode = mode.into();
        }
        apply_overrides!(
            self,
            inputs,
            battery_energy_kwh_per_day,
            sfoc_t_per_kwh,
            fuel_energy_density_mj_per_t,
            co2_factor,
            fuel_saved_t_per_day,
            annual_fuel_t,
            dwt,
            distance_nm,
            fuel_price_per_t,
            capex,
            opex_per_year,
            main_engine_power_kw,
            main_engine_sfoc_g_per_kwh,
            eexi_co2_factor,
            reference_speed_kn,
            reference_eexi,
            saving_percent,
            baseline_consumption_t_per_day,
        );
        inputs
    }
}

/// 텍스트 또는 JSON 으로 한 결과를 출력한다.
fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

pub fn handle_report(
    inputs: &VesselInputs,
    tr: &Translator,
    format: OutputFormat,
) -> Result<(), AppError> {
    let full = EfficiencyReport::compute(inputs, tr);
    emit(format, &full, || report::render_text(&full, tr))
}

pub fn handle_bess(
    inputs: &VesselInputs,
    tr: &Translator,
    format: OutputFormat,
) -> Result<(), AppError> {
    let result = battery::bess_efficiency(inputs.bess_input());
    emit(format, &result, || report::render_bess(&result, tr))
}

pub fn handle_cii(
    inputs: &VesselInputs,
    tr: &Translator,
    format: OutputFormat,
) -> Result<(), AppError> {
    let result = imo::cii_before_after(inputs.cii_input(), inputs.fuel_saved_t_per_day);
    emit(format, &result, || report::render_cii(&result, tr))
}

/// ROI 결과와 함께, 회수 가능하면 월별 회수 곡선을 출력한다.
pub fn handle_roi(
    inputs: &VesselInputs,
    tr: &Translator,
    format: OutputFormat,
) -> Result<(), AppError> {
    #[derive(Serialize)]
    struct RoiOutput {
        roi: battery::RoiResult,
        payback_chart: Option<charts::PaybackChart>,
    }

    let roi = battery::roi(inputs.roi_input());
    let payback_chart = charts::payback_chart(&roi, inputs.capex, tr);
    let output = RoiOutput { roi, payback_chart };
    emit(format, &output, || {
        let mut text = report::render_roi(&output.roi, tr);
        if let Some(chart) = &output.payback_chart {
            text.push('\n');
            text.push_str(&report::render_payback_chart(chart, tr));
        }
        text
    })
}

pub fn handle_eexi(
    inputs: &VesselInputs,
    tr: &Translator,
    format: OutputFormat,
) -> Result<(), AppError> {
    let result = imo::eexi(inputs.eexi_input());
    emit(format, &result, || report::render_eexi(&result, tr))
}

pub fn handle_savings(
    inputs: &VesselInputs,
    tr: &Translator,
    format: OutputFormat,
) -> Result<(), AppError> {
    let result = fuel_savings::percent_savings(inputs.percent_savings_input());
    emit(format, &result, || report::render_percent_savings(&result, tr))
}

/// 현재 유효한 설정(덮어쓴 입력 포함)을 파일로 저장한다.
pub fn handle_init_config(
    cfg: &Config,
    path: &std::path::Path,
    tr: &Translator,
) -> Result<(), AppError> {
    cfg.save(path)?;
    println!("{} {}", tr.t(keys::CONFIG_WRITTEN), path.display());
    Ok(())
}
