use crate::config::HBPConfig;
use crate::opt::hbp_optimizer::HeuristicOptimizer;
use crate::opt::order::{bin_preference_order, item_placement_order};
use log::info;
use rectpack::entities::{Instance, Solution};
use rectpack::free_space::{Guillotine, MaxRects, StrategyKind};
use serde::{Deserialize, Serialize};
use thousands::Separable;

/// Score of a single strategy run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunScore {
    pub strategy: StrategyKind,
    pub cost: u64,
    pub bins_used: usize,
    pub n_unplaced: usize,
}

impl From<&Solution> for RunScore {
    fn from(solution: &Solution) -> Self {
        RunScore {
            strategy: solution.strategy,
            cost: solution.cost(),
            bins_used: solution.bins_used(),
            n_unplaced: solution.unplaced_items().count(),
        }
    }
}

/// The solution kept by the selector, along with the scores of both runs
#[derive(Debug, Clone)]
pub struct Selection {
    pub chosen: Solution,
    pub guillotine: RunScore,
    pub maxrects: RunScore,
}

/// Packs the instance with both strategies, each on its own fresh layouts, and keeps the cheaper solution.
pub fn solve(instance: &Instance, config: &HBPConfig) -> Selection {
    let item_order = item_placement_order(instance);
    let bin_order = bin_preference_order(instance);

    let run_guillotine =
        || HeuristicOptimizer::new(instance, Guillotine, &item_order, &bin_order).solve();
    let run_maxrects =
        || HeuristicOptimizer::new(instance, MaxRects, &item_order, &bin_order).solve();

    let (guillotine, maxrects) = match config.parallel {
        true => rayon::join(run_guillotine, run_maxrects),
        false => (run_guillotine(), run_maxrects()),
    };

    select(guillotine, maxrects)
}

/// Keeps the guillotine solution only if it is strictly cheaper. Ties go to maximal rectangles.
pub fn select(guillotine: Solution, maxrects: Solution) -> Selection {
    let (g_score, m_score) = (RunScore::from(&guillotine), RunScore::from(&maxrects));

    let chosen = match g_score.cost < m_score.cost {
        true => guillotine,
        false => maxrects,
    };

    info!(
        "[SELECT] {}: cost {} ({} bins), {}: cost {} ({} bins), keeping {}",
        g_score.strategy,
        g_score.cost.separate_with_commas(),
        g_score.bins_used,
        m_score.strategy,
        m_score.cost.separate_with_commas(),
        m_score.bins_used,
        chosen.strategy
    );

    Selection {
        chosen,
        guillotine: g_score,
        maxrects: m_score,
    }
}
