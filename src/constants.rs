//! 모든 계산식이 공유하는 고정 상수.

/// 연간 운항일수 [일/년]. 모든 연간 환산에 동일하게 적용한다.
pub const OPERATING_DAYS_PER_YEAR: f64 = 300.0;

/// kWh → MJ 환산 계수 (1 kWh = 3.6 MJ)
pub const MJ_PER_KWH: f64 = 3.6;

/// 연 → 월 환산
pub const MONTHS_PER_YEAR: f64 = 12.0;
