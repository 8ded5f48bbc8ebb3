use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Источник карт для одной раздачи.
///
/// Движку нужно только две операции: перемешать и снять верхнюю карту.
/// Колода принадлежит ровно одной раздаче и после неё выбрасывается.
pub trait DeckSource {
    /// Перемешать оставшиеся карты.
    fn shuffle(&mut self);

    /// Снять верхнюю карту. `None` – колода кончилась.
    fn draw(&mut self) -> Option<Card>;

    /// Сколько карт ещё осталось.
    fn remaining(&self) -> usize;
}

/// Колода карт. В домене: просто упорядоченный список карт.
/// Перемешивание делает тот, кто владеет RNG (см. infra::decks), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода без уже известных карт (для симуляций).
    pub fn without(known: &[Card]) -> Self {
        let mut deck = Self::standard_52();
        deck.remove_cards(known);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
