use crate::config::HBPConfig;
use rectpack::free_space::StrategyKind;
use rectpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HBPOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub guillotine_cost: u64,
    pub maxrects_cost: u64,
    pub config: HBPConfig,
}

/// One line of the batch `summary.json`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BatchEntry {
    pub file_name: String,
    /// Number of items, `None` if the instance could not be read
    pub n: Option<usize>,
    /// Number of bins
    pub k: Option<usize>,
    pub cost: Option<u64>,
    pub bins_used: Option<usize>,
    pub strategy: Option<StrategyKind>,
    pub run_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn failed(file_name: String, error: &anyhow::Error) -> Self {
        BatchEntry {
            file_name,
            n: None,
            k: None,
            cost: None,
            bins_used: None,
            strategy: None,
            run_time_ms: None,
            error: Some(format!("{error:#}")),
        }
    }
}
