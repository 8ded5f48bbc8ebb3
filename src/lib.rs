//! Heads-up покер: человек против бота.
//!
//! Матч из нескольких раундов: блайнды, улицы, fold/call/raise,
//! банк, шоудаун, перенос стеков и определение победителя матча.
//! Колода, оценщик рук и поведение бота подключаются через трейты
//! (`DeckSource`, `HandEvaluator`, `OpponentPolicy`).

pub mod ai;
pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
