// src/models/velocity.rs

/// 速度場
///
/// 時刻 t・位置 (x, y) における速度成分を返す。
/// 積分中は 1 ステップ・1 粒子につき各成分 1 回ずつ呼ばれる。
pub trait VelocityField {
    /// x 方向の速度成分
    fn u(&self, t: f64, x: f64, y: f64) -> f64;

    /// y 方向の速度成分
    fn v(&self, t: f64, x: f64, y: f64) -> f64;

    /// 両成分をまとめて評価する
    fn eval(&self, t: f64, x: f64, y: f64) -> (f64, f64) {
        (self.u(t, x, y), self.v(t, x, y))
    }
}

impl<T: VelocityField + ?Sized> VelocityField for &T {
    fn u(&self, t: f64, x: f64, y: f64) -> f64 {
        (**self).u(t, x, y)
    }

    fn v(&self, t: f64, x: f64, y: f64) -> f64 {
        (**self).v(t, x, y)
    }
}

impl<T: VelocityField + ?Sized> VelocityField for Box<T> {
    fn u(&self, t: f64, x: f64, y: f64) -> f64 {
        (**self).u(t, x, y)
    }

    fn v(&self, t: f64, x: f64, y: f64) -> f64 {
        (**self).v(t, x, y)
    }
}

/// 2 つのクロージャ（または関数）から速度場を組み立てる
#[derive(Clone)]
pub struct FnField<U, V> {
    u: U,
    v: V,
}

impl<U, V> FnField<U, V>
where
    U: Fn(f64, f64, f64) -> f64,
    V: Fn(f64, f64, f64) -> f64,
{
    pub fn new(u: U, v: V) -> Self {
        FnField { u, v }
    }
}

impl<U, V> VelocityField for FnField<U, V>
where
    U: Fn(f64, f64, f64) -> f64,
    V: Fn(f64, f64, f64) -> f64,
{
    fn u(&self, t: f64, x: f64, y: f64) -> f64 {
        (self.u)(t, x, y)
    }

    fn v(&self, t: f64, x: f64, y: f64) -> f64 {
        (self.v)(t, x, y)
    }
}
