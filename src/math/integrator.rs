// src/math/integrator.rs

/// Adams-Bashforth 2段法の積分器の状態
///
/// `prev_f` は前ステップで評価した速度 (u, v)。初回ステップでは `None`。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdamsBashforth2State {
    pub prev_f: Option<(f64, f64)>,
}

/// 陽的 Euler 法による 1 ステップ
///
/// # 引数
/// - `current`: 現在の位置 (x, y)
/// - `f`: 現在の速度 (u, v)
/// - `dt`: 時間刻み
///
/// # 戻り値
/// - 次の位置 (x, y)
pub fn euler_step(current: (f64, f64), f: (f64, f64), dt: f64) -> (f64, f64) {
    (current.0 + dt * f.0, current.1 + dt * f.1)
}

/// Adams-Bashforth 2段法による 1 ステップ
///
/// # 引数
/// - `state`: 現在の積分器の状態
/// - `current`: 現在の位置 (x, y)
/// - `f`: 現在の速度 (u, v)
/// - `dt`: 時間刻み
///
/// # 戻り値
/// - 更新後の積分器の状態
/// - 次の位置 (x, y)
pub fn adams_bashforth_2(
    state: AdamsBashforth2State,
    current: (f64, f64),
    f: (f64, f64),
    dt: f64,
) -> (AdamsBashforth2State, (f64, f64)) {
    let next = match state.prev_f {
        Some((u_prev, v_prev)) => (
            current.0 + dt * (1.5 * f.0 - 0.5 * u_prev),
            current.1 + dt * (1.5 * f.1 - 0.5 * v_prev),
        ),
        // 初回ステップではEuler法で計算
        None => euler_step(current, f, dt),
    };
    (AdamsBashforth2State { prev_f: Some(f) }, next)
}
