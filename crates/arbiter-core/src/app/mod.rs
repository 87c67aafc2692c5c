//! App - アプリケーション層
//!
//! ports と impls を組み合わせて決定エンジンを構成します。
//!
//! # 主要コンポーネント
//! - **EngineBuilder**: エンジンの構築とワイヤリング（起動時検証つき）
//! - **DecisionEngine**: strategy レジストリ + 決定ループ + 統計
//! - **DecisionHistory**: 上限付きの決定履歴

pub mod builder;
pub mod engine;
pub mod history;

pub use self::builder::{BuildError, EngineBuilder};
pub use self::engine::DecisionEngine;
pub use self::history::DecisionHistory;
