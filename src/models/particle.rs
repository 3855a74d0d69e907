// src/models/particle.rs

/// 粒子の構造体
///
/// 位置の履歴のみを持つ。`x[0]`, `y[0]` が初期条件。
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub(crate) x: Vec<f64>, // x 座標の履歴
    pub(crate) y: Vec<f64>, // y 座標の履歴
}

impl Particle {
    /// 初期条件のみを持つ粒子（長さ 1）を生成する
    pub fn new(x0: f64, y0: f64) -> Self {
        Particle {
            x: vec![x0],
            y: vec![y0],
        }
    }

    /// 位置バッファを指定の長さに揃える
    ///
    /// 先頭側の値は保持し、伸ばした分は 0.0 で埋める。
    pub fn resize(&mut self, capacity: usize) {
        self.x.resize(capacity, 0.0);
        self.y.resize(capacity, 0.0);
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_holds_initial_condition() {
        let p = Particle::new(1.5, -2.0);
        assert_eq!(p.x(), &[1.5]);
        assert_eq!(p.y(), &[-2.0]);
        assert_eq!(p.len(), 1);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_resize_keeps_leading_and_zero_fills() {
        let mut p = Particle::new(1.0, 2.0);
        p.resize(3);
        assert_eq!(p.x(), &[1.0, 0.0, 0.0]);
        assert_eq!(p.y(), &[2.0, 0.0, 0.0]);

        p.x[1] = 5.0;
        p.resize(2);
        assert_eq!(p.x(), &[1.0, 5.0]);
        assert_eq!(p.y(), &[2.0, 0.0]);
    }
}
