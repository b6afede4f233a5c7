use serde::Serialize;

use crate::constants::OPERATING_DAYS_PER_YEAR;

/// CII 등급 (A가 가장 우수).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CiiRating {
    A,
    B,
    C,
    D,
    E,
}

impl CiiRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            CiiRating::A => "A",
            CiiRating::B => "B",
            CiiRating::C => "C",
            CiiRating::D => "D",
            CiiRating::E => "E",
        }
    }
}

impl std::fmt::Display for CiiRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CII 계산 입력.
#[derive(Debug, Clone)]
pub struct CiiInput {
    /// 연간 연료 소비량 [t/년]
    pub annual_fuel_t: f64,
    /// CO₂ 환산계수 [g CO₂ / g fuel]
    pub co2_factor: f64,
    /// 재화중량톤수 [DWT]
    pub dwt: f64,
    /// 연간 항해거리 [NM]
    pub distance_nm: f64,
}

/// CII 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CiiResult {
    /// 달성 CII [gCO₂ / DWT·nm]
    pub attained: f64,
    pub rating: CiiRating,
}

/// 달성 CII 값으로 등급을 정한다. 각 경계값은 다음 등급에 속한다.
pub fn cii_rating(attained: f64) -> CiiRating {
    if attained < 4.0 {
        CiiRating::A
    } else if attained < 6.0 {
        CiiRating::B
    } else if attained < 9.0 {
        CiiRating::C
    } else if attained < 12.0 {
        CiiRating::D
    } else {
        CiiRating::E
    }
}

/// 달성 CII 를 계산한다. 질량항은 연료[t] × 1000 × CF 로 둔다.
pub fn cii(input: CiiInput) -> CiiResult {
    let mass_term = input.annual_fuel_t * 1000.0 * input.co2_factor;
    let transport_work = input.dwt * input.distance_nm;
    let attained = if transport_work != 0.0 {
        mass_term / transport_work
    } else {
        log::debug!("dwt × distance is zero; attained CII defaults to 0");
        0.0
    };
    CiiResult {
        attained,
        rating: cii_rating(attained),
    }
}

/// BESS 적용 전/후 CII 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CiiComparison {
    pub before: CiiResult,
    pub after: CiiResult,
    /// BESS 적용 후 연간 연료 소비량 [t/년]
    pub adjusted_annual_fuel_t: f64,
}

/// 기준 연료량과 (기준 − 일일 절감량 × 300일) 연료량으로 CII 를 각각 계산한다.
pub fn cii_before_after(baseline: CiiInput, fuel_saved_t_per_day: f64) -> CiiComparison {
    let adjusted_annual_fuel_t =
        baseline.annual_fuel_t - fuel_saved_t_per_day * OPERATING_DAYS_PER_YEAR;
    let after = cii(CiiInput {
        annual_fuel_t: adjusted_annual_fuel_t,
        ..baseline.clone()
    });
    CiiComparison {
        before: cii(baseline),
        after,
        adjusted_annual_fuel_t,
    }
}
