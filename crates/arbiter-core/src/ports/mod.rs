//! Ports - 抽象化レイヤー
//!
//! エンジンが外部（時刻、ID、採点アルゴリズム、学習）に依存する箇所を
//! trait として切り出し、テストや将来の実装で差し替えられるようにします。

pub mod clock;
pub mod feedback;
pub mod id_generator;
pub mod strategy;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::feedback::{FeedbackHook, NoopFeedbackHook};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::strategy::DecisionStrategy;
