// src/models/time_grid.rs

use crate::math::{Result, SimError};

/// 時間格子の構造体
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    dt: f64,          // 時間刻み（s）
    tmax: f64,        // 終了時刻（s）
    times: Vec<f64>,  // 時刻列 times[i] = i * dt
}

impl TimeGrid {
    /// 時間格子を生成する
    ///
    /// # 引数
    /// - `dt`: 時間刻み（正の有限値）
    /// - `tmax`: 終了時刻（0 以上の有限値）
    ///
    /// # 戻り値
    /// - 時刻数 floor(tmax / dt) + 1 の時間格子
    pub fn new(dt: f64, tmax: f64) -> Result<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "dt は正の有限値である必要があります: {dt}"
            )));
        }
        if !(tmax.is_finite() && tmax >= 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "tmax は 0 以上の有限値である必要があります: {tmax}"
            )));
        }

        // usize に収まらない時刻数は扱えない
        let quotient = (tmax / dt).floor();
        let step_count = if quotient < usize::MAX as f64 {
            (quotient as usize).checked_add(1)
        } else {
            None
        }
        .ok_or_else(|| {
            SimError::InvalidArgument(format!(
                "時刻数が大きすぎます: tmax / dt = {quotient}"
            ))
        })?;
        let times = (0..step_count).map(|i| i as f64 * dt).collect();

        Ok(TimeGrid { dt, tmax, times })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    pub fn step_count(&self) -> usize {
        self.times.len()
    }

    /// 粒子の位置バッファに必要な長さ（最終ステップの書き込み先を含む）
    pub fn capacity(&self) -> usize {
        self.step_count() + 1
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }
}
