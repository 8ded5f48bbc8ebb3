use crate::ai::{offered_call, OpponentPolicy, OpponentView};
use crate::engine::actions::{Action, LegalAction};

/// Коллирует всегда, когда call предложен, иначе фолдит.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallingPolicy;

impl OpponentPolicy for CallingPolicy {
    fn decide(&mut self, legal: &[LegalAction], _view: &OpponentView<'_>) -> Action {
        match offered_call(legal) {
            Some(_) => Action::Call,
            None => Action::Fold,
        }
    }
}

/// Фолдит на любой рейз.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoldingPolicy;

impl OpponentPolicy for FoldingPolicy {
    fn decide(&mut self, _legal: &[LegalAction], _view: &OpponentView<'_>) -> Action {
        Action::Fold
    }
}
