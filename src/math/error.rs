// src/math/error.rs

use thiserror::Error;

/// クレート全体で使う Result 型
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    /// 不正な引数（初期条件の長さ不一致、dt・tmax の範囲外など）
    #[error("不正な引数です: {0}")]
    InvalidArgument(String),

    /// 粒子インデックスが範囲外
    #[error("粒子インデックス {index} は範囲外です（粒子数: {count}）")]
    OutOfRange { index: usize, count: usize },

    /// 時間格子・初期条件・速度場のいずれかが未設定
    #[error("設定が完了していません: {0}")]
    NotConfigured(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
