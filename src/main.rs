// src/main.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use log::{info, warn};

use trajsim::simulation::load_parameters::load_scenario;
use trajsim::TrajectorySystem;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // シナリオの読み込み
    let scenario = load_scenario("config/scenario.yaml")?;
    if scenario.initial_conditions.x.is_empty() {
        warn!("シナリオに粒子が定義されていません");
    }

    // 時間格子・初期条件・速度場の設定
    let mut system = TrajectorySystem::new(
        scenario.dt,
        scenario.tmax,
        &scenario.initial_conditions.x,
        &scenario.initial_conditions.y,
        &scenario.field,
    )?;

    // 時間積分
    system.march(scenario.scheme)?;

    if let Some(index) = scenario.print_particle {
        system.print_trajectory(index)?;
    }

    // JSON出力
    if let Some(dir) = Path::new(&scenario.output).parent() {
        fs::create_dir_all(dir)?;
    }
    system.export_data(&scenario.output)?;

    info!("Simulation finished. Results saved to {}", scenario.output);
    Ok(())
}
