// src/simulation/framework.rs

use log::info;

use crate::config::Scheme;
use crate::math::{adams_bashforth_2, euler_step, AdamsBashforth2State, Result, SimError};
use crate::models::VelocityField;
use crate::simulation::{ConfigState, TrajectorySystem};

impl<'f> TrajectorySystem<'f> {
    /// 指定スキームで時間積分を実行する
    pub fn march(&mut self, scheme: Scheme) -> Result<()> {
        match scheme {
            Scheme::Euler => self.march_ee(),
            Scheme::AdamsBashforth => self.march_ab(),
        }
    }

    /// 陽的 Euler 法で全時刻を積分する
    pub fn march_ee(&mut self) -> Result<()> {
        let field = self.ready()?;
        let grid = self
            .grid
            .as_ref()
            .ok_or(SimError::NotConfigured("時間格子が未設定です"))?;
        let dt = grid.dt();

        // 時刻ループの内側で全粒子を進める
        for (i, &t) in grid.times().iter().enumerate() {
            for particle in self.particles.iter_mut() {
                let current = (particle.x[i], particle.y[i]);
                let f = field.eval(t, current.0, current.1);
                let (x_next, y_next) = euler_step(current, f, dt);
                particle.x[i + 1] = x_next;
                particle.y[i + 1] = y_next;
            }
        }

        info!(
            "Euler法による積分完了: 粒子数={}, ステップ数={}",
            self.particles.len(),
            grid.step_count()
        );
        Ok(())
    }

    /// Adams-Bashforth 2段法で全時刻を積分する（初回ステップは Euler 法）
    pub fn march_ab(&mut self) -> Result<()> {
        let field = self.ready()?;
        let grid = self
            .grid
            .as_ref()
            .ok_or(SimError::NotConfigured("時間格子が未設定です"))?;
        let dt = grid.dt();

        // 粒子ごとの積分器状態（前ステップの速度）
        let mut integrators = vec![AdamsBashforth2State::default(); self.particles.len()];

        for (i, &t) in grid.times().iter().enumerate() {
            for (particle, integrator) in self.particles.iter_mut().zip(integrators.iter_mut()) {
                let current = (particle.x[i], particle.y[i]);
                let f = field.eval(t, current.0, current.1);
                let (new_state, (x_next, y_next)) =
                    adams_bashforth_2(std::mem::take(integrator), current, f, dt);
                particle.x[i + 1] = x_next;
                particle.y[i + 1] = y_next;
                *integrator = new_state;
            }
        }

        info!(
            "Adams-Bashforth法による積分完了: 粒子数={}, ステップ数={}",
            self.particles.len(),
            grid.step_count()
        );
        Ok(())
    }

    /// 設定完了を確認し、速度場を取り出す
    fn ready(&self) -> Result<&'f dyn VelocityField> {
        if self.state != ConfigState::FullyConfigured {
            return Err(SimError::NotConfigured("時間格子と初期条件の両方が必要です"));
        }
        self.field.ok_or(SimError::NotConfigured("速度場が未設定です"))
    }
}
