// src/simulation/output.rs

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::math::Result;
use crate::simulation::TrajectorySystem;

/// JSON 出力の形式 { "t": [...], "parts": [ { "x": [...], "y": [...] }, ... ] }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryData {
    pub t: Vec<f64>,
    pub parts: Vec<ParticleData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl<'f> TrajectorySystem<'f> {
    /// 指定粒子の軌跡を表形式で書き込む
    ///
    /// # 引数
    /// - `writer`: 出力先
    /// - `index`: 粒子番号
    ///
    /// 粒子番号が範囲外の場合は何も書き込まずに `OutOfRange` を返す。
    pub fn write_trajectory<W: Write>(&self, writer: &mut W, index: usize) -> Result<()> {
        let particle = self.particle(index)?;
        let times = self.grid().map(|g| g.times()).unwrap_or_default();

        writeln!(writer, "{:>6}{:>6}{:>6}", 't', 'x', 'y')?;
        for (i, t) in times.iter().enumerate() {
            writeln!(writer, "{:6.2}{:6.2}{:6.2}", t, particle.x[i], particle.y[i])?;
        }
        Ok(())
    }

    /// 指定粒子の軌跡を標準出力に表示する
    pub fn print_trajectory(&self, index: usize) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_trajectory(&mut handle, index)
    }

    /// 時刻列と全粒子の軌跡を出力用の構造体にまとめる
    pub fn to_data(&self) -> TrajectoryData {
        TrajectoryData {
            t: self.grid().map(|g| g.times().to_vec()).unwrap_or_default(),
            parts: self
                .particles()
                .iter()
                .map(|p| ParticleData {
                    x: p.x().to_vec(),
                    y: p.y().to_vec(),
                })
                .collect(),
        }
    }

    /// 4 スペースでインデントした JSON を書き込む
    pub fn write_export<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.to_data().serialize(&mut serializer)?;
        Ok(())
    }

    /// 軌跡データを JSON ファイルに出力する
    ///
    /// 先にメモリ上で全体をエンコードしてからファイルを作成する。
    pub fn export_data<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut buffer = Vec::new();
        self.write_export(&mut buffer)?;
        buffer.push(b'\n');

        let mut file = File::create(path.as_ref())?;
        file.write_all(&buffer)?;
        file.flush()?;

        info!(
            "軌跡データを出力: {} (粒子数={})",
            path.as_ref().display(),
            self.particle_count()
        );
        Ok(())
    }
}

/// 出力済みの JSON ファイルを読み込む
pub fn load_export<P: AsRef<Path>>(path: P) -> Result<TrajectoryData> {
    let file = File::open(path)?;
    let data: TrajectoryData = serde_json::from_reader(BufReader::new(file))?;
    Ok(data)
}
