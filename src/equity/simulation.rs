use super::cutoff::Cutoff;
use crate::Probability;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::set::CardSet;
use crate::error::Error;
use crate::error::Result;
use crate::showdown::determine_winners;
use crate::showdown::validate_unique;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;

/// Trials for callers that do not pick a sample count.
pub const DEFAULT_SAMPLES: usize = 50_000;

/// Spreads worker RNG seeds apart; any odd constant works.
const SEED_STRIDE: u64 = 0x9E3779B97F4A7C15;

/// Per-player win/tie probability estimates over the trials that ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub win: Vec<Probability>,
    pub tie: Vec<Probability>,
    pub trials: usize,
}

/// The hero's slice of an estimate against randomized opponents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroEquity {
    pub win: Probability,
    pub tie: Probability,
    pub trials: usize,
}

impl HeroEquity {
    pub fn lose(&self) -> Probability {
        (1.0 - self.win - self.tie).max(0.0)
    }
}

/// Worker-local win/tie counters, reduced by summation once all workers
/// finish. Every member of a tied winning group receives a full tie unit
/// per trial, never a 1/group share.
struct Counts {
    win: Vec<u64>,
    tie: Vec<u64>,
    trials: u64,
}

impl Counts {
    fn new(players: usize) -> Self {
        Self {
            win: vec![0; players],
            tie: vec![0; players],
            trials: 0,
        }
    }

    fn record(&mut self, winners: &[usize]) {
        match winners {
            [sole] => self.win[*sole] += 1,
            tied => {
                for w in tied {
                    self.tie[*w] += 1;
                }
            }
        }
        self.trials += 1;
    }

    fn absorb(mut self, other: Self) -> Self {
        for (a, b) in self.win.iter_mut().zip(other.win) {
            *a += b;
        }
        for (a, b) in self.tie.iter_mut().zip(other.tie) {
            *a += b;
        }
        self.trials += other.trials;
        self
    }

    fn normalize(self) -> Estimate {
        let trials = self.trials.max(1) as f64;
        Estimate {
            win: self.win.iter().map(|w| *w as f64 / trials).collect(),
            tie: self.tie.iter().map(|t| *t as f64 / trials).collect(),
            trials: self.trials as usize,
        }
    }
}

/// A Monte Carlo equity run: trial count, reproducibility, worker fan-out,
/// and an optional cutoff. Each trial owns its own deck; nothing but the
/// counters survives a trial.
#[derive(Debug, Clone)]
pub struct Simulation {
    samples: usize,
    seed: Option<u64>,
    workers: usize,
    cutoff: Cutoff,
}

impl Simulation {
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            seed: None,
            workers: 1,
            cutoff: Cutoff::new(),
        }
    }

    /// Fix the base seed; a seeded run reproduces exactly for a fixed
    /// worker count.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// One worker per available core.
    pub fn parallel(self) -> Self {
        let cores = num_cpus::get();
        self.workers(cores)
    }

    pub fn cutoff(mut self, cutoff: Cutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Win/tie equity when every player's hole cards are known. A board
    /// that is already complete needs no randomness: one showdown decides,
    /// the sole winner takes win probability 1, and a tied group takes tie
    /// probability 1 each.
    pub fn equity(&self, hole_hands: &[Vec<Card>], board: &[Card]) -> Result<Estimate> {
        if hole_hands.is_empty() {
            return Err(Error::NoPlayers);
        }
        if board.len() > 5 {
            return Err(Error::BoardSizeOutOfRange { len: board.len() });
        }
        for (player, hole) in hole_hands.iter().enumerate() {
            if hole.len() < 2 {
                return Err(Error::TooFewHoleCards { player });
            }
        }
        validate_unique(hole_hands, board)?;

        let players = hole_hands.len();
        if board.len() == 5 {
            let showdown = determine_winners(hole_hands, board)?;
            let mut counts = Counts::new(players);
            counts.record(&showdown.winners);
            return Ok(counts.normalize());
        }

        let known = hole_hands
            .iter()
            .flatten()
            .chain(board)
            .fold(CardSet::empty(), |mut set, card| {
                set.insert(*card);
                set
            });
        let missing = 5 - board.len();
        self.check_supply(known, missing)?;
        log::debug!(
            "simulating equity: {} players, {} board cards, {} trials",
            players,
            board.len(),
            self.samples
        );
        let counts = self.fan_out(players, |rng| {
            let mut deck = Deck::without(known);
            deck.shuffle(rng);
            let drawn = deck.draw_many(missing).expect("supply checked up front");
            let mut full = board.to_vec();
            full.extend(drawn);
            determine_winners(hole_hands, &full)
                .expect("trial deals are disjoint by construction")
                .winners
        });
        Ok(counts.normalize())
    }

    /// Hero win/tie equity against opponents whose hole cards are freshly
    /// randomized every trial. Hero is always player index 0.
    pub fn hero_vs_random(
        &self,
        hero_hole: &[Card],
        board: &[Card],
        num_opponents: usize,
    ) -> Result<HeroEquity> {
        if hero_hole.len() < 2 {
            return Err(Error::TooFewHoleCards { player: 0 });
        }
        if board.len() > 5 {
            return Err(Error::BoardSizeOutOfRange { len: board.len() });
        }
        if num_opponents == 0 {
            return Err(Error::NoOpponents);
        }
        validate_unique(&[hero_hole.to_vec()], board)?;

        let known = hero_hole
            .iter()
            .chain(board)
            .fold(CardSet::empty(), |mut set, card| {
                set.insert(*card);
                set
            });
        let missing = 5 - board.len();
        self.check_supply(known, missing + 2 * num_opponents)?;
        log::debug!(
            "simulating hero vs {} random opponents: {} board cards, {} trials",
            num_opponents,
            board.len(),
            self.samples
        );
        let counts = self.fan_out(1 + num_opponents, |rng| {
            let mut deck = Deck::without(known);
            deck.shuffle(rng);
            let mut hole_hands = vec![hero_hole.to_vec()];
            for _ in 0..num_opponents {
                hole_hands.push(deck.draw_many(2).expect("supply checked up front"));
            }
            let mut full = board.to_vec();
            full.extend(deck.draw_many(missing).expect("supply checked up front"));
            determine_winners(&hole_hands, &full)
                .expect("trial deals are disjoint by construction")
                .winners
        });
        let estimate = counts.normalize();
        Ok(HeroEquity {
            win: estimate.win[0],
            tie: estimate.tie[0],
            trials: estimate.trials,
        })
    }

    /// Enough cards must remain outside the known set before any trial
    /// starts drawing.
    fn check_supply(&self, known: CardSet, needed: usize) -> Result<()> {
        let remaining = 52 - known.size();
        if remaining < needed {
            return Err(Error::InsufficientCards {
                requested: needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Split the trial budget across workers, each with its own RNG and
    /// local counters, and sum the counters at the end. Trial order is
    /// irrelevant to the aggregate.
    fn fan_out<F>(&self, players: usize, trial: F) -> Counts
    where
        F: Fn(&mut SmallRng) -> Vec<usize> + Sync,
    {
        use rayon::iter::IndexedParallelIterator;
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let counts = self
            .quotas()
            .into_par_iter()
            .enumerate()
            .map(|(worker, quota)| {
                let mut rng = SmallRng::seed_from_u64(
                    seed.wrapping_add(SEED_STRIDE.wrapping_mul(worker as u64)),
                );
                let mut counts = Counts::new(players);
                for _ in 0..quota {
                    if self.cutoff.tripped() {
                        break;
                    }
                    counts.record(&trial(&mut rng));
                }
                counts
            })
            .reduce(|| Counts::new(players), Counts::absorb);
        if (counts.trials as usize) < self.samples {
            log::warn!(
                "cutoff tripped after {} of {} trials",
                counts.trials,
                self.samples
            );
        }
        counts
    }

    fn quotas(&self) -> Vec<usize> {
        let base = self.samples / self.workers;
        let extra = self.samples % self.workers;
        (0..self.workers)
            .map(|w| base + usize::from(w < extra))
            .collect()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}

/// Monte Carlo win/tie probabilities per player, all hole cards known.
pub fn simulate_equity(
    hole_hands: &[Vec<Card>],
    board: &[Card],
    samples: usize,
) -> Result<(Vec<Probability>, Vec<Probability>)> {
    let estimate = Simulation::new(samples).equity(hole_hands, board)?;
    Ok((estimate.win, estimate.tie))
}

/// Monte Carlo win/tie probabilities for a hero against randomized
/// opponents.
pub fn simulate_hero_vs_random_opponents(
    hero_hole: &[Card],
    board: &[Card],
    num_opponents: usize,
    samples: usize,
) -> Result<(Probability, Probability)> {
    let equity = Simulation::new(samples).hero_vs_random(hero_hole, board, num_opponents)?;
    Ok((equity.win, equity.tie))
}
