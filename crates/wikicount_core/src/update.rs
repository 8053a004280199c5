use crate::{ArticleStatus, Effect, Msg, RunPhase, RunState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: RunState, msg: Msg) -> (RunState, Vec<Effect>) {
    let effects = match msg {
        Msg::RunStarted { titles } => {
            if state.phase() != RunPhase::Idle {
                return (state, Vec::new());
            }
            state.start_run(titles);
            vec![Effect::RenderHeader]
        }
        Msg::ArticleCounted { index, words } => {
            finalize(&mut state, index, ArticleStatus::Counted(words))
        }
        Msg::ArticleFailed { index, reason } => {
            finalize(&mut state, index, ArticleStatus::Failed(reason))
        }
        Msg::RunFinished => {
            if state.phase() == RunPhase::Running {
                state.finish_run();
                vec![Effect::RenderSummary]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn finalize(state: &mut RunState, index: usize, status: ArticleStatus) -> Vec<Effect> {
    if state.phase() == RunPhase::Running && state.finalize(index, status) {
        vec![Effect::RenderRow { index }]
    } else {
        Vec::new()
    }
}
