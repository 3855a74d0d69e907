// src/config/scenario.rs

use serde::Deserialize;

use crate::models::VelocityField;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub dt: f64,   // 時間刻み（s）
    pub tmax: f64, // 終了時刻（s）
    #[serde(default)]
    pub scheme: Scheme,
    pub field: FieldConfig,
    pub initial_conditions: InitialConditions,
    #[serde(default)]
    pub print_particle: Option<usize>, // 標準出力に表示する粒子番号
    pub output: String,                // JSON 出力先
}

#[derive(Debug, Deserialize)]
pub struct InitialConditions {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// 時間積分スキーム
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Euler,
    #[default]
    AdamsBashforth,
}

/// シナリオファイルから選べる解析的な速度場
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
    /// 一様流 (u, v)
    Uniform { u: f64, v: f64 },
    /// 原点まわりの剛体回転 u = -ωy, v = ωx
    Rotation { omega: f64 },
    /// 単純せん断流 u = rate * y, v = 0
    Shear { rate: f64 },
    /// 向きが回転する一様流 u = A cos(ωt), v = A sin(ωt)
    Oscillating { amplitude: f64, frequency: f64 },
}

impl VelocityField for FieldConfig {
    fn u(&self, t: f64, _x: f64, y: f64) -> f64 {
        match *self {
            FieldConfig::Uniform { u, .. } => u,
            FieldConfig::Rotation { omega } => -omega * y,
            FieldConfig::Shear { rate } => rate * y,
            FieldConfig::Oscillating { amplitude, frequency } => amplitude * (frequency * t).cos(),
        }
    }

    fn v(&self, t: f64, x: f64, _y: f64) -> f64 {
        match *self {
            FieldConfig::Uniform { v, .. } => v,
            FieldConfig::Rotation { omega } => omega * x,
            FieldConfig::Shear { .. } => 0.0,
            FieldConfig::Oscillating { amplitude, frequency } => amplitude * (frequency * t).sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let yaml = r#"
dt: 0.5
tmax: 2.0
scheme: euler
field:
  kind: rotation
  omega: 2.0
initial_conditions:
  x: [1.0, 0.0]
  y: [0.0, 1.0]
print_particle: 1
output: out.json
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.scheme, Scheme::Euler);
        assert_eq!(scenario.field, FieldConfig::Rotation { omega: 2.0 });
        assert_eq!(scenario.initial_conditions.x, vec![1.0, 0.0]);
        assert_eq!(scenario.print_particle, Some(1));
        assert_eq!(scenario.output, "out.json");
    }

    #[test]
    fn test_scheme_defaults_to_adams_bashforth() {
        let yaml = r#"
dt: 0.1
tmax: 1.0
field: { kind: uniform, u: 1.0, v: 0.0 }
initial_conditions: { x: [0.0], y: [0.0] }
output: out.json
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.scheme, Scheme::AdamsBashforth);
        assert_eq!(scenario.print_particle, None);
    }

    #[test]
    fn test_field_catalog_values() {
        let rot = FieldConfig::Rotation { omega: 2.0 };
        assert_eq!(rot.eval(0.0, 1.0, 3.0), (-6.0, 2.0));

        let shear = FieldConfig::Shear { rate: 0.5 };
        assert_eq!(shear.eval(0.0, 9.0, 4.0), (2.0, 0.0));

        let osc = FieldConfig::Oscillating { amplitude: 2.0, frequency: 1.0 };
        let (u, v) = osc.eval(0.0, 0.0, 0.0);
        assert!((u - 2.0).abs() < 1e-12);
        assert!(v.abs() < 1e-12);
    }
}
