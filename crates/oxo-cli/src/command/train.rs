use anyhow::Context as _;
use oxo_engine::Player;
use oxo_evaluator::move_policy::PolicyKind;
use oxo_training::{
    config::SearchConfig,
    search::{GenerationReport, Search},
    seed::SearchSeed,
};
use rand::Rng as _;

use crate::{model::search_report::SearchReport, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Individuals per generation, positive and even [default: 100]
    #[arg(long)]
    population_size: Option<usize>,
    /// Generations to evaluate [default: 5]
    #[arg(long)]
    generations: Option<usize>,
    /// Probability that a child is mutated [default: 0.1]
    #[arg(long)]
    mutation_probability: Option<f64>,
    /// Matches played per fitness evaluation [default: 100]
    #[arg(long)]
    trials: Option<u32>,
    /// Side the candidates play (`a` moves first) [default: a]
    #[arg(long)]
    role: Option<Player>,
    /// Move policy of the candidates (`blind` or `preference`) [default: blind]
    #[arg(long)]
    policy: Option<PolicyKind>,
    /// Seed as up to 32 hex digits; random if omitted
    #[arg(long)]
    seed: Option<SearchSeed>,
    /// Evaluate individuals on separate threads
    #[arg(long)]
    parallel: bool,
    /// Print a JSON report to stdout
    #[arg(long)]
    json: bool,
}

impl TrainArg {
    fn search_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.generations.unwrap_or(defaults.num_generations),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            trials_per_evaluation: self.trials.unwrap_or(defaults.trials_per_evaluation),
            role: self.role.unwrap_or(defaults.role),
            policy: self.policy.unwrap_or(defaults.policy),
            parallel: self.parallel,
        }
    }
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = arg.search_config();
    let search = Search::new(config.clone()).context("Invalid search configuration")?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let trials = config.trials_per_evaluation;

    eprintln!("Seed: {seed}");
    log::debug!("search config: {config:?}");

    let outcome = search.run(&mut seed.rng(), |report| {
        print_generation(report, trials);
    })?;

    eprintln!("Search completed.");
    eprintln!(
        "  Best strategy: {} => {}/{trials}",
        outcome.best.strategy(),
        outcome.best.fitness()
    );

    if arg.json {
        let report = SearchReport::new(seed, config, outcome);
        util::print_json(&report)?;
    } else {
        println!("{}", outcome.best.strategy());
    }

    Ok(())
}

fn print_generation(report: &GenerationReport, trials: u32) {
    let GenerationReport {
        generation,
        best,
        stats,
        selection,
    } = report;
    eprintln!("Generation #{generation}:");
    eprintln!("  Best: {} => {}/{trials}", best.strategy(), best.fitness());
    eprintln!("  Fitness Stats:");
    eprintln!("    Min:    {}", stats.min);
    eprintln!("    Max:    {}", stats.max);
    eprintln!("    Mean:   {:.3}", stats.mean);
    eprintln!("    Median: {}", stats.median);
    eprintln!("    StdDev: {:.3}", stats.std_dev);
    eprintln!("    Zeros:  {}", stats.zero_count);
    if let Some(selection) = selection {
        eprintln!("  Selection: {selection:?}");
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[derive(Debug, clap::Parser)]
    struct Wrapper {
        #[clap(flatten)]
        arg: TrainArg,
    }

    #[test]
    fn test_no_flags_gives_default_config() {
        let wrapper = Wrapper::parse_from(["oxo"]);
        assert_eq!(wrapper.arg.search_config(), SearchConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let wrapper = Wrapper::parse_from([
            "oxo",
            "--population-size",
            "10",
            "--generations",
            "3",
            "--mutation-probability",
            "0.5",
            "--trials",
            "20",
            "--role",
            "b",
            "--policy",
            "preference",
            "--seed",
            "ff",
            "--parallel",
        ]);
        let config = wrapper.arg.search_config();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.num_generations, 3);
        assert!((config.mutation_probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.trials_per_evaluation, 20);
        assert_eq!(config.role, Player::B);
        assert_eq!(config.policy, PolicyKind::Preference);
        assert!(config.parallel);
        assert_eq!(wrapper.arg.seed, Some("ff".parse().unwrap()));
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        assert!(Wrapper::try_parse_from(["oxo", "--seed", "not-hex"]).is_err());
    }
}
