//! IdGenerator port - ID 生成の抽象化
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（Clock の時刻を timestamp 部に使う）

use crate::domain::DecisionId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は DecisionResult の ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（エンジンを Arc で共有するため）
pub trait IdGenerator: Send + Sync {
    fn generate_decision_id(&self) -> DecisionId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// FixedClock を渡すと timestamp 部分が決定的になります（ランダム部は残る）。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_decision_id(&self) -> DecisionId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        DecisionId::from(ulid)
    }
}
