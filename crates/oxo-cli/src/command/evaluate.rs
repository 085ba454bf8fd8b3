use anyhow::Context as _;
use oxo_engine::Player;
use oxo_evaluator::{
    fitness_evaluator::{FitnessEvaluator as _, WinCountEvaluator},
    move_policy::PolicyKind,
    strategy::Strategy,
};
use oxo_training::{
    config::{DEFAULT_TRIALS_PER_EVALUATION, SearchConfig},
    seed::SearchSeed,
};
use rand::Rng as _;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Strategy genotype: nine of `X`, `O` or `.` in row-major order
    #[arg(long)]
    strategy: Strategy,
    /// Matches to play
    #[arg(long, default_value_t = DEFAULT_TRIALS_PER_EVALUATION)]
    trials: u32,
    /// Side the strategy plays (`a` moves first)
    #[arg(long, default_value_t = Player::A)]
    role: Player,
    /// Move policy (`blind` or `preference`)
    #[arg(long, default_value_t)]
    policy: PolicyKind,
    /// Seed as up to 32 hex digits; random if omitted
    #[arg(long)]
    seed: Option<SearchSeed>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        strategy,
        trials,
        role,
        policy,
        seed,
    } = arg;

    SearchConfig {
        trials_per_evaluation: *trials,
        ..SearchConfig::default()
    }
    .validate()
    .context("Invalid evaluation settings")?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Seed: {seed}");

    let evaluator = WinCountEvaluator::new(*trials, *policy);
    let wins = evaluator
        .evaluate(strategy, *role, &mut seed.rng())
        .with_context(|| format!("Failed to evaluate strategy {strategy}"))?;

    eprintln!("Strategy: {strategy} (player {role}, {policy} policy)");
    eprintln!("  Wins: {wins}/{trials}");
    println!("{wins}/{trials}");

    Ok(())
}
