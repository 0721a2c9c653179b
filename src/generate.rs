//! Random word pairs, for tests, benchmarks and the `--random` mode.
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use pa_types::Sequence;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorModel {
    #[default]
    Uniform,
    /// Swap e*n random pairs of adjacent symbols.
    Transpose,
    /// Drop a suffix of size e*n.
    Truncate,
}

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Generate")]
pub struct GenerateArgs {
    /// Generate a random pair of this length instead of reading words.
    #[clap(short = 'n', long = "random", value_name = "LENGTH", display_order = 20)]
    pub length: Option<usize>,

    /// Fraction of positions to mutate.
    #[clap(short, long, default_value_t = 0.1, display_order = 21)]
    pub error_rate: f32,

    #[clap(long, value_enum, default_value_t, value_name = "MODEL", display_order = 22)]
    pub error_model: ErrorModel,

    /// Seed to initialize RNG for reproducability
    #[clap(long, display_order = 23)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn to_generate_options(&self) -> Option<GenerateOptions> {
        Some(GenerateOptions {
            length: self.length?,
            error_rate: self.error_rate,
            error_model: self.error_model,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub length: usize,
    pub error_rate: f32,
    pub error_model: ErrorModel,
}

const ALPH: [u8; 4] = *b"ACGT";

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPH[rng.gen_range(0..ALPH.len())]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        2 => Mutation::Deletion(rng.gen_range(0..len_b)),
        _ => unreachable!(),
    }
}

/// A random word of `opt.length` symbols over `ACGT`, and a mutated copy.
pub fn generate_pair(opt: &GenerateOptions, rng: &mut impl Rng) -> (Sequence, Sequence) {
    let a = (0..opt.length).map(|_| rand_char(rng)).collect_vec();
    let num_mutations = (opt.error_rate * opt.length as f32).ceil() as usize;
    let mut b = a.clone();
    match opt.error_model {
        ErrorModel::Uniform => {
            for _ in 0..num_mutations {
                match random_mutation(b.len(), rng) {
                    Mutation::Substitution(i, c) => b[i] = c,
                    Mutation::Insertion(i, c) => b.insert(i, c),
                    Mutation::Deletion(i) => {
                        b.remove(i);
                    }
                }
            }
        }
        ErrorModel::Transpose => {
            if b.len() >= 2 {
                for _ in 0..num_mutations {
                    let i = rng.gen_range(0..b.len() - 1);
                    b.swap(i, i + 1);
                }
            }
        }
        ErrorModel::Truncate => {
            b.truncate(b.len().saturating_sub(num_mutations));
        }
    }
    (a, b)
}

pub fn setup_sequences(n: usize, e: f32) -> (Sequence, Sequence) {
    setup_sequences_with_seed(31415, n, e)
}

pub fn setup_sequences_with_seed(seed: u64, n: usize, e: f32) -> (Sequence, Sequence) {
    setup_sequences_with_model(seed, n, e, ErrorModel::Uniform)
}

pub fn setup_sequences_with_model(
    seed: u64,
    n: usize,
    e: f32,
    error_model: ErrorModel,
) -> (Sequence, Sequence) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    generate_pair(
        &GenerateOptions {
            length: n,
            error_rate: e,
            error_model,
        },
        &mut rng,
    )
}
