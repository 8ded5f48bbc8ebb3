//! Колоды для раундов: перемешанная RNG-колода и заранее сложенная колода.
//!
//! Раунд получает колоду через `DeckProvider::fresh_deck` и владеет ею до конца.

use std::collections::VecDeque;

use crate::domain::card::Card;
use crate::domain::deck::{Deck, DeckSource};
use crate::engine::RandomSource;
use crate::infra::rng::{DeterministicRng, SystemRng};

/// 52 карты, перемешанные переданным RNG. Карты снимаются с конца вектора.
#[derive(Clone, Debug)]
pub struct ShuffledDeck<R: RandomSource> {
    deck: Deck,
    rng: R,
}

impl<R: RandomSource> ShuffledDeck<R> {
    pub fn new(rng: R) -> Self {
        Self {
            deck: Deck::standard_52(),
            rng,
        }
    }
}

impl<R: RandomSource> DeckSource for ShuffledDeck<R> {
    fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.deck.cards);
    }

    fn draw(&mut self) -> Option<Card> {
        self.deck.draw_one()
    }

    fn remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Колода с фиксированным порядком: карты выдаются с начала списка,
/// `shuffle` ничего не делает. Для тестов и разбора конкретных раздач.
///
/// Порядок раздачи в раунде: 2 карты человеку, 2 боту, флоп (3), тёрн, ривер.
#[derive(Clone, Debug, Default)]
pub struct StackedDeck {
    cards: VecDeque<Card>,
}

impl StackedDeck {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Колода из строки вида `"Ah Kd 2c ..."`.
    pub fn parse(s: &str) -> Result<Self, String> {
        Ok(Self::new(crate::domain::card::parse_cards(s)?))
    }
}

impl DeckSource for StackedDeck {
    fn shuffle(&mut self) {}

    fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Поставщик новой колоды на каждый раунд.
pub trait DeckProvider: Send {
    fn fresh_deck(&mut self) -> Box<dyn DeckSource + Send>;
}

/// Каждый раунд – новая колода на системном RNG.
#[derive(Clone, Debug, Default)]
pub struct SystemDeckProvider;

impl DeckProvider for SystemDeckProvider {
    fn fresh_deck(&mut self) -> Box<dyn DeckSource + Send> {
        Box::new(ShuffledDeck::new(SystemRng))
    }
}

/// Воспроизводимые колоды: раунд N получает RNG с seed `seed + N`.
#[derive(Clone, Debug)]
pub struct SeededDeckProvider {
    seed: u64,
    dealt: u64,
}

impl SeededDeckProvider {
    pub fn new(seed: u64) -> Self {
        Self { seed, dealt: 0 }
    }
}

impl DeckProvider for SeededDeckProvider {
    fn fresh_deck(&mut self) -> Box<dyn DeckSource + Send> {
        let rng = DeterministicRng::from_seed(self.seed.wrapping_add(self.dealt));
        self.dealt += 1;
        Box::new(ShuffledDeck::new(rng))
    }
}

/// Очередь заранее сложенных колод; когда она пуста – колоды от `fallback`.
pub struct StackedDeckProvider {
    queue: VecDeque<StackedDeck>,
    fallback: Box<dyn DeckProvider>,
}

impl StackedDeckProvider {
    pub fn new(decks: impl IntoIterator<Item = StackedDeck>) -> Self {
        Self {
            queue: decks.into_iter().collect(),
            fallback: Box::new(SeededDeckProvider::new(0)),
        }
    }
}

impl DeckProvider for StackedDeckProvider {
    fn fresh_deck(&mut self) -> Box<dyn DeckSource + Send> {
        match self.queue.pop_front() {
            Some(deck) => Box::new(deck),
            None => self.fallback.fresh_deck(),
        }
    }
}
