//! Command-line arguments.  Every flag overrides the matching config field.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use dp_core::{AgentId, SimConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Waiting agents randomly drop their held chopstick.
    RandomDrop,
    /// Free every chopstick once the whole table has waited long enough.
    Delayed,
}

/// Discrete-time dining philosophers simulation.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// JSON file with a (partial) simulation config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Seats at the table (agents and chopsticks).
    #[arg(long)]
    pub agents: Option<usize>,

    /// Seat of the erratic agent.
    #[arg(long, conflicts_with = "no_erratic")]
    pub erratic: Option<u32>,

    /// Seat no erratic agent.
    #[arg(long)]
    pub no_erratic: bool,

    /// RNG seed; identical seeds give identical runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Base probability of continuing to think.
    #[arg(long)]
    pub think: Option<f64>,

    /// Base probability of continuing to eat.
    #[arg(long)]
    pub eat: Option<f64>,

    /// Probability decay per tick spent in the same state.
    #[arg(long)]
    pub decay: Option<f64>,

    /// Deadlock handling policy.
    #[arg(long, value_enum)]
    pub policy: Option<Policy>,

    /// Ticks the whole table must wait before delayed recovery.
    #[arg(long)]
    pub recovery_delay: Option<u32>,

    /// Base probability of a random drop.
    #[arg(long)]
    pub drop_base: Option<f64>,

    /// Added to the drop probability per tick spent waiting.
    #[arg(long)]
    pub drop_increment: Option<f64>,

    /// Log cumulative time statistics every tick.
    #[arg(long)]
    pub time_stats: bool,

    /// Log every philosopher's state every tick.
    #[arg(long)]
    pub agent_states: bool,

    /// Log every chopstick's owner every tick.
    #[arg(long)]
    pub resource_states: bool,

    /// Per-tick log file.
    #[arg(long, default_value = "output.txt")]
    pub log: PathBuf,

    /// Also write CSV output into this directory.
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,

    /// Debug-level diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Layer the command-line overrides on top of `config`.
    pub fn apply(&self, mut config: SimConfig) -> SimConfig {
        if let Some(v) = self.ticks {
            config.total_ticks = v;
        }
        if let Some(v) = self.agents {
            config.agent_count = v;
        }
        if let Some(v) = self.erratic {
            config.erratic_agent = Some(AgentId(v));
        }
        if self.no_erratic {
            config.erratic_agent = None;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }

        let p = &mut config.probabilities;
        if let Some(v) = self.think {
            p.base_think = v;
        }
        if let Some(v) = self.eat {
            p.base_eat = v;
        }
        if let Some(v) = self.decay {
            p.decay_rate = v;
        }
        if let Some(v) = self.drop_base {
            p.drop_base = v;
        }
        if let Some(v) = self.drop_increment {
            p.drop_increment = v;
        }

        if let Some(v) = self.recovery_delay {
            config.recovery_delay = v;
        }
        match self.policy {
            Some(Policy::RandomDrop) => config = config.with_random_drop(),
            Some(Policy::Delayed) => {
                let delay = config.recovery_delay;
                config = config.with_delayed_recovery(delay);
            }
            None => {}
        }

        config.report.time_stats |= self.time_stats;
        config.report.agent_states |= self.agent_states;
        config.report.resource_states |= self.resource_states;
        config
    }
}
