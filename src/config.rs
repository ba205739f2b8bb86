use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = 100)]
    pub stagnation_limit: u32,
    #[arg(long, default_value_t = 10)]
    pub perturbation_swaps: u32,
    #[arg(long, default_value_t = 10_000_000)]
    pub max_iterations: u64,
    #[arg(long, default_value_t = 1)]
    pub workers: usize,
}
