//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации;
//! - колоды и поставщики колод для раундов;
//! - генерация ID сессий.

pub mod decks;
pub mod ids;
pub mod rng;

pub use decks::*;
pub use ids::*;
pub use rng::*;
