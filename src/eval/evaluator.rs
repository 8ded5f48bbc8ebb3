use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, mask_of, straight_ranks};

/// Вычислить лучшую руку из hole + board.
///
/// Обычно это 2 + 5 карт, но функция корректна для любого числа карт до 7:
/// при 5+ картах перебираются все 5-карточные комбинации, при меньшем
/// количестве оцениваются только пары/сеты/каре и старшие карты.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    if all_cards.len() <= 5 {
        return evaluate_hand(&all_cards);
    }
    best_of_all_5card_combinations(&all_cards)
}

/// Перебираем все комбинации 5 карт из N (N=6–7) и выбираем лучшую.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();
    let mut best = HandRank(0);

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_hand(&five));
                    }
                }
            }
        }
    }

    best
}

/// Оценка набора не более чем из 5 карт.
fn evaluate_hand(cards: &[Card]) -> HandRank {
    // (ранг, сколько раз), по убыванию количества, затем ранга.
    let mut counts: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for card in cards {
        match counts.iter_mut().find(|(r, _)| *r == card.rank) {
            Some((_, n)) => *n += 1,
            None => counts.push((card.rank, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let five = cards.len() == 5;
    let is_flush = five && Suit::ALL.iter().any(|s| cards.iter().all(|c| c.suit == *s));
    let straight_high = if five && counts.len() == 5 {
        detect_straight(mask_of(cards.iter().map(|c| c.rank)))
    } else {
        None
    };

    if let (true, Some(high)) = (is_flush, straight_high) {
        return HandRank::from_category_and_ranks(HandCategory::StraightFlush, straight_ranks(high));
    }

    let top = counts.first().map(|c| c.1).unwrap_or(0);
    let second = counts.get(1).map(|c| c.1).unwrap_or(0);

    let category = match (top, second) {
        (4, _) => HandCategory::FourOfAKind,
        (3, 2) => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        (3, _) => HandCategory::ThreeOfAKind,
        (2, 2) => HandCategory::TwoPair,
        (2, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    if let (HandCategory::Straight, Some(high)) = (category, straight_high) {
        return HandRank::from_category_and_ranks(category, straight_ranks(high));
    }

    // Ранги в порядке значимости; лишние места забиваем двойками
    // (они одинаковы у всех и ни на что не влияют).
    let mut ranks = [Rank::Two; 5];
    for (slot, (rank, _)) in ranks.iter_mut().zip(counts.iter()) {
        *slot = *rank;
    }
    HandRank::from_category_and_ranks(category, ranks)
}
