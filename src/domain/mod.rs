//! Доменная модель heads-up матча: карты, фишки, колода, улицы, места и конфиг.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod hand;
pub mod player;

/// Идентификатор сессии (матча) в реестре.
pub type SessionId = u64;

/// Номер раунда внутри матча (с единицы).
pub type RoundIndex = u32;

pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
