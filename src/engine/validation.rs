use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::engine::actions::Action;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Проверка действия человека до того, как что-либо меняется.
///
/// Fold и Call допустимы всегда (call обрезается по стеку при применении).
/// Raise: не больше стека; при `enforce_min_raise` – не меньше минимума.
pub fn validate_human_action(
    action: &Action,
    human_stack: Chips,
    betting: &BettingState,
    config: &GameConfig,
) -> Result<(), EngineError> {
    match action {
        Action::Fold | Action::Call => Ok(()),

        Action::Raise(amount) => {
            if *amount > human_stack {
                return Err(EngineError::raise_too_large(*amount, human_stack));
            }

            let min = if config.enforce_min_raise {
                config.min_raise(betting.current_bet)
            } else {
                Chips(1)
            };
            if *amount < min {
                return Err(EngineError::raise_below_minimum(*amount, min));
            }

            Ok(())
        }
    }
}
