use crate::search::{PuzzleState, SolutionPath};

/// Replay a path from `initial_state`, checking that every recorded action
/// is legal, produces the next recorded state, and that the path ends in a
/// goal.
pub fn validate(path: &SolutionPath, initial_state: &PuzzleState) -> Result<(), String> {
    if path.initial_state() != initial_state {
        return Err(format!(
            "Path starts at {} instead of {}",
            path.initial_state(),
            initial_state
        ));
    }

    let mut cur_state = *initial_state;
    for (step, (action, recorded)) in path
        .actions()
        .iter()
        .zip(path.states().iter().skip(1))
        .enumerate()
    {
        cur_state = cur_state.apply(*action).ok_or_else(|| {
            format!(
                "Action {} at step {} is not applicable in state {}",
                action, step, cur_state
            )
        })?;
        if cur_state != *recorded {
            return Err(format!(
                "Step {} reaches {} but the path records {}",
                step, cur_state, recorded
            ));
        }
    }

    if !cur_state.is_goal() {
        return Err(format!(
            "Path does not reach a goal state, final state is: {}",
            cur_state
        ));
    }

    Ok(())
}
