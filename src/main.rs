use clap::Parser;
use edit_distance::prelude::*;
use itertools::Itertools;
use rand::SeedableRng;

/// The pairs computed when no words are given.
const SAMPLES: [(&str, &str); 9] = [
    ("HOME", "HOUSE"),
    ("HOUSE", "HOME"),
    ("PLASMA", "ALTRUISM"),
    ("", ""),
    ("2", ""),
    ("1", "1"),
    ("Foo", "Bar"),
    ("abcde", "fghij"),
    ("RELEVANT", "ELEPHANT"),
];

fn print_result(ed: &EditDistance, args: &Cli) {
    if args.silent {
        println!("{}", ed.distance());
        return;
    }
    println!("{ed}");
    if args.op_matrix {
        println!("{}", ed.operation_matrix_string());
    }
    if args.ops {
        println!("[{}]", ed.operations().iter().join(", "));
    }
    if args.script {
        println!("{}", EditScript::from_ops(ed.operations()));
    }
    println!();
}

fn main() -> Result<(), ConfigError> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let config = args.engine.to_config()?;
    log::debug!("{config:?}");

    let pairs: Vec<(Sequence, Sequence)> = if let Some(opt) = args.generate.to_generate_options() {
        let seed = args.generate.seed.unwrap_or(31415);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        vec![generate_pair(&opt, &mut rng)]
    } else if let (Some(a), Some(b)) = (&args.start, &args.target) {
        vec![(a.as_bytes().to_vec(), b.as_bytes().to_vec())]
    } else {
        SAMPLES
            .iter()
            .map(|(a, b)| (a.as_bytes().to_vec(), b.as_bytes().to_vec()))
            .collect()
    };

    let start = instant::Instant::now();
    for (a, b) in &pairs {
        let ed = EditDistance::with_config(a, b, &config);
        print_result(&ed, &args);
    }
    log::info!(
        "computed {} pair(s) in {:?}",
        pairs.len(),
        start.elapsed()
    );
    Ok(())
}
