// src/simulation/mod.rs

pub mod load_parameters;
pub mod output;
pub mod framework;

use log::debug;

use crate::math::{Result, SimError};
use crate::models::{Particle, TimeGrid, VelocityField};

/// 設定の進み具合
///
/// 時間格子と初期条件の両方がそろった時点で `FullyConfigured` になり、
/// 粒子の位置バッファが最終的な長さに確保される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigState {
    Empty,
    TimeReady,
    IcReady,
    FullyConfigured,
}

/// 粒子軌跡計算の全体状態を表す構造体
///
/// 速度場は借用で保持するため、積分を呼ぶ間は呼び出し側で生存させておく必要がある。
pub struct TrajectorySystem<'f> {
    grid: Option<TimeGrid>,
    particles: Vec<Particle>,
    state: ConfigState,
    field: Option<&'f dyn VelocityField>,
}

impl<'f> Default for TrajectorySystem<'f> {
    fn default() -> Self {
        TrajectorySystem {
            grid: None,
            particles: Vec::new(),
            state: ConfigState::Empty,
            field: None,
        }
    }
}

impl<'f> TrajectorySystem<'f> {
    /// 時間格子・初期条件・速度場をまとめて設定して生成する
    pub fn new(
        dt: f64,
        tmax: f64,
        x0: &[f64],
        y0: &[f64],
        field: &'f dyn VelocityField,
    ) -> Result<Self> {
        let mut system = TrajectorySystem::default();
        system.set_time(dt, tmax)?;
        system.set_ics(x0, y0)?;
        system.set_velocity(field);
        Ok(system)
    }

    /// 時間格子を設定する（再設定時は全体を作り直す）
    pub fn set_time(&mut self, dt: f64, tmax: f64) -> Result<()> {
        let grid = TimeGrid::new(dt, tmax)?;
        debug!(
            "時間格子を設定: dt={}, tmax={}, 時刻数={}",
            grid.dt(),
            grid.tmax(),
            grid.step_count()
        );
        self.grid = Some(grid);

        self.state = match self.state {
            ConfigState::Empty | ConfigState::TimeReady => ConfigState::TimeReady,
            ConfigState::IcReady | ConfigState::FullyConfigured => ConfigState::FullyConfigured,
        };
        self.resize_particles();
        Ok(())
    }

    /// 初期条件を設定する
    ///
    /// x0 と y0 の長さが異なる場合は何も変更せずに `InvalidArgument` を返す。
    pub fn set_ics(&mut self, x0: &[f64], y0: &[f64]) -> Result<()> {
        if x0.len() != y0.len() {
            return Err(SimError::InvalidArgument(format!(
                "初期条件の長さが一致しません: x0={}, y0={}",
                x0.len(),
                y0.len()
            )));
        }

        self.particles = x0
            .iter()
            .zip(y0.iter())
            .map(|(&x, &y)| Particle::new(x, y))
            .collect();
        debug!("初期条件を設定: 粒子数={}", self.particles.len());

        self.state = match self.state {
            ConfigState::Empty | ConfigState::IcReady => ConfigState::IcReady,
            ConfigState::TimeReady | ConfigState::FullyConfigured => ConfigState::FullyConfigured,
        };
        self.resize_particles();
        Ok(())
    }

    /// 速度場を設定する
    pub fn set_velocity(&mut self, field: &'f dyn VelocityField) {
        self.field = Some(field);
    }

    /// 全粒子の位置バッファを時刻数 + 1 に揃える
    fn resize_particles(&mut self) {
        if self.state != ConfigState::FullyConfigured {
            return;
        }
        if let Some(grid) = &self.grid {
            let capacity = grid.capacity();
            for particle in &mut self.particles {
                particle.resize(capacity);
            }
            debug!("位置バッファを再確保: 粒子数={}, 長さ={}", self.particles.len(), capacity);
        }
    }

    pub fn state(&self) -> ConfigState {
        self.state
    }

    pub fn grid(&self) -> Option<&TimeGrid> {
        self.grid.as_ref()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// 指定番号の粒子を返す
    pub fn particle(&self, index: usize) -> Result<&Particle> {
        self.particles.get(index).ok_or(SimError::OutOfRange {
            index,
            count: self.particles.len(),
        })
    }
}
