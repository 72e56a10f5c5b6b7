// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod settlement;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// 決済関連
pub use settlement::FailingCommitSettlement;
