use reversi_core::{ActionId, Side, ACTION_SPACE, PASS_ACTION};
use tracing::{debug, trace};

use crate::backup::backpropagate;
use crate::config::MctsConfig;
use crate::error::{MctsError, Result};
use crate::evaluation::PolicyValueModel;
use crate::expansion::expand_and_evaluate;
use crate::game::{actions_or_pass, GameRules};
use crate::search_result::SearchResult;
use crate::selection::select_action;
use crate::stats::{Edge, StatsStore};

/// Where a simulation is after applying its latest selected action
enum Phase {
    Selecting,
    Expanded,
    Terminal,
}

/// How a finished simulation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimulationEnd {
    Expanded,
    Terminal,
}

/// Guided Monte Carlo tree search over per-edge statistics.
///
/// Every call to [`Mcts::search`] starts from an empty statistics store; nothing
/// carries over between decisions. The store of the last decision stays
/// readable through [`Mcts::stats`].
pub struct Mcts {
    stats: StatsStore,
}

impl Mcts {
    /// Create a new MCTS instance
    pub fn new() -> Self {
        Self {
            stats: StatsStore::new(),
        }
    }

    /// Run `config.num_simulations` simulations from `game` with `side` to move.
    ///
    /// Positions with zero or one legal action are answered without search.
    pub fn search<G: GameRules, M: PolicyValueModel>(
        &mut self,
        game: &G,
        side: Side,
        model: &M,
        config: &MctsConfig,
    ) -> Result<SearchResult> {
        self.stats.clear();

        let legal = game.legal_actions(side);
        match legal.as_slice() {
            [] => return Ok(SearchResult::forced(PASS_ACTION)),
            [only] => return Ok(SearchResult::forced(*only)),
            _ => {}
        }

        // Root priors
        expand_and_evaluate(&mut self.stats, game, side, model)?;
        let mut evaluations = 1;

        for sim in 0..config.num_simulations {
            let end = self.simulate(game, side, model)?;
            if end == SimulationEnd::Expanded {
                evaluations += 1;
            }
            trace!(sim, ?end, edges = self.stats.len(), "simulation complete");
        }

        let result = self.create_search_result(game, &legal, config, evaluations);
        debug!(
            legal = legal.len(),
            simulations = result.num_simulations_run,
            evaluations = result.evaluations,
            edges = self.stats.len(),
            best = ?result.best_action(),
            "search complete"
        );
        Ok(result)
    }

    /// One simulation on a private copy of the root.
    ///
    /// Descends by [`select_action`] until the game ends or an edge is taken for
    /// the first time, then backs a single value up the whole path.
    fn simulate<G: GameRules, M: PolicyValueModel>(
        &mut self,
        root: &G,
        root_side: Side,
        model: &M,
    ) -> Result<SimulationEnd> {
        let mut game = root.clone();
        let mut to_move = root_side;
        let mut path: Vec<Edge> = Vec::new();
        let mut phase = Phase::Selecting;

        loop {
            match phase {
                Phase::Selecting => {
                    let state = game.fingerprint();
                    let actions = actions_or_pass(&game, to_move);
                    let action = select_action(&self.stats, state, &actions)
                        .ok_or(MctsError::NoLegalMoves)?;
                    let first_visit = self.stats.visits(state, action) == 0;

                    path.push((state, action));
                    game.apply(action, to_move)?;
                    to_move = to_move.opponent();

                    phase = if game.is_terminal() {
                        Phase::Terminal
                    } else if first_visit {
                        Phase::Expanded
                    } else {
                        Phase::Selecting
                    };
                }
                Phase::Expanded => {
                    let value = expand_and_evaluate(&mut self.stats, &game, to_move, model)?;
                    backpropagate(&mut self.stats, &path, value * root_side.sign());
                    return Ok(SimulationEnd::Expanded);
                }
                Phase::Terminal => {
                    let outcome = game.winner().value();
                    backpropagate(&mut self.stats, &path, outcome * root_side.sign());
                    return Ok(SimulationEnd::Terminal);
                }
            }
        }
    }

    /// Raw policy from the root edges' visit counts
    fn create_search_result<G: GameRules>(
        &self,
        game: &G,
        legal: &[ActionId],
        config: &MctsConfig,
        evaluations: u32,
    ) -> SearchResult {
        let root = game.fingerprint();
        let mut raw_policy = vec![0.0f32; ACTION_SPACE];
        let mut root_visit_counts = Vec::with_capacity(legal.len());

        for &action in legal {
            let visits = self.stats.visits(root, action);
            raw_policy[action] = visits as f32;
            root_visit_counts.push((action, visits));
        }

        SearchResult::new(
            raw_policy,
            root_visit_counts,
            config.num_simulations,
            evaluations,
        )
    }

    /// Edge statistics of the most recent decision
    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }

    /// Drop the statistics of the last decision
    pub fn reset(&mut self) {
        self.stats.clear();
    }
}

impl Default for Mcts {
    fn default() -> Self {
        Self::new()
    }
}
