use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{ensure, Context as _};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finite_relations::{
    compose::{compose, compose_via_matrix, paths},
    generate::{MatrixGenerator, RelationGenerator},
    practice::{Kind, QuestionSet},
    product::count_product,
    represent::{cartesian_plot, matrix_table, set_notation, Digraph},
    reveal::{PathHighlight, ProductReveal},
    settings::Settings,
    storyboard::Storyboard,
    timeline::Animation,
};

#[derive(Parser, Debug)]
#[command(name = "relviz", version, about = "Explore binary relations on finite sets")]
struct Cli {
    /// Seed for the random generator; a fresh one is drawn and logged when absent.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Settings JSON overriding the built-in generator presets and timeline.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a random relation in all four representations.
    Relation(RelationArgs),
    /// Multiply two random Boolean matrices.
    Product(ProductArgs),
    /// Compose two random relations both ways.
    Compose(ComposeArgs),
    /// Play the composition animation in the terminal.
    Animate(AnimateArgs),
    /// Print a practice question set with solutions.
    Practice(PracticeArgs),
}

#[derive(Parser, Debug)]
struct RelationArgs {
    /// Size N of the set {1..N}.
    #[arg(long)]
    size: Option<usize>,

    /// Fewest pairs to draw.
    #[arg(long)]
    min: Option<usize>,

    /// Most pairs to draw.
    #[arg(long)]
    max: Option<usize>,
}

#[derive(Parser, Debug)]
struct ProductArgs {
    /// Size of the square matrices.
    #[arg(long)]
    size: Option<usize>,

    /// Work out one cell step by step, as `row,col` (1-indexed).
    #[arg(long, value_parser = parse_cell)]
    cell: Option<(usize, usize)>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Size N of the set {1..N}.
    #[arg(long)]
    size: Option<usize>,

    /// Highlight the paths behind one cell of M_R ⊙ M_S, as `row,col` (1-indexed).
    #[arg(long, value_parser = parse_cell)]
    cell: Option<(usize, usize)>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Size N of the set {1..N}.
    #[arg(long)]
    size: Option<usize>,

    /// Ticks per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Playback speed; 2 plays twice as fast.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

#[derive(Parser, Debug)]
struct PracticeArgs {
    /// Number of questions; cycles through every kind.
    #[arg(long)]
    count: Option<usize>,

    /// Print the question set as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (i, j) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got '{s}'"))?;
    let parse = |x: &str| -> Result<usize, String> {
        match x.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(format!("'{x}' is not a positive index")),
        }
    };
    Ok((parse(i)?, parse(j)?))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => Settings::default(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeded generator");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match cli.cmd {
        Command::Relation(args) => cmd_relation(&settings, args, &mut rng),
        Command::Product(args) => cmd_product(&settings, args, &mut rng),
        Command::Compose(args) => cmd_compose(&settings, args, &mut rng),
        Command::Animate(args) => cmd_animate(&settings, args, &mut rng),
        Command::Practice(args) => cmd_practice(&settings, args, &mut rng),
    }
}

fn override_generator(
    preset: RelationGenerator,
    size: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
) -> anyhow::Result<RelationGenerator> {
    Ok(RelationGenerator::new(
        size.unwrap_or(preset.domain.size()),
        min.unwrap_or(preset.min_pairs),
        max.unwrap_or(preset.max_pairs),
    )?)
}

fn cmd_relation(
    settings: &Settings,
    args: RelationArgs,
    rng: &mut ChaCha8Rng,
) -> anyhow::Result<()> {
    let g = override_generator(settings.representations, args.size, args.min, args.max)?;
    let (r, draws) = g.generate_with_draws(rng);

    println!("A = {}", g.domain);
    println!("{} ({} pairs from {draws} draws)", set_notation("R", &r), r.len());
    println!("\nMatrix:\n{}", matrix_table(&r.to_matrix()));
    println!("Cartesian plot:\n{}", cartesian_plot(&r));
    println!("Directed graph: {}", Digraph::new(&r));
    Ok(())
}

fn cmd_product(settings: &Settings, args: ProductArgs, rng: &mut ChaCha8Rng) -> anyhow::Result<()> {
    let preset = settings.boolean_products;
    let g = match args.size {
        Some(size) => MatrixGenerator::new(size, preset.min_draws, preset.max_draws)?,
        None => preset,
    };
    let mut reveal = ProductReveal::new(g.generate(rng), g.generate(rng))?;

    println!("A:\n{}", matrix_table(reveal.left()));
    println!("B:\n{}", matrix_table(reveal.right()));

    if let Some((i, j)) = args.cell {
        reveal
            .reveal(i - 1, j - 1)
            .with_context(|| format!("reveal cell ({i},{j})"))?;
        if let Some(calc) = reveal.selected() {
            println!("(A ⊙ B)[{i},{j}] = {calc}");
            let via: Vec<String> = calc.witnesses().map(|k| (k + 1).to_string()).collect();
            if !via.is_empty() {
                println!("  true through k = {}", via.join(", "));
            }
            println!();
        }
    }

    reveal.reveal_all()?;
    let product = reveal.view().map(|&c| c.unwrap_or(0));
    println!("A ⊙ B:\n{}", matrix_table(&product));
    Ok(())
}

fn cmd_compose(settings: &Settings, args: ComposeArgs, rng: &mut ChaCha8Rng) -> anyhow::Result<()> {
    let g = override_generator(settings.matrix_composition, args.size, None, None)?;
    let (r, s) = (g.generate(rng), g.generate(rng));
    let rs = compose(&r, &s).context("R and S do not compose")?;
    let sr = compose(&s, &r).context("S and R do not compose")?;

    println!("A = {}", g.domain);
    println!("{}", set_notation("R", &r));
    println!("{}", set_notation("S", &s));
    println!("{}", set_notation("R ∘ S", &rs));
    println!("{}", set_notation("S ∘ R", &sr));
    if rs == sr {
        println!("R ∘ S = S ∘ R for these two relations.");
    }

    let steps: Vec<String> = paths(&r, &s).iter().map(ToString::to_string).collect();
    println!("\nPaths: {}", if steps.is_empty() { "none".to_string() } else { steps.join(", ") });

    let (mr, ms) = (r.to_matrix(), s.to_matrix());
    println!("\nM_R:\n{}", matrix_table(&mr));
    println!("M_S:\n{}", matrix_table(&ms));
    let counts = count_product(&mr.map(|&x| u32::from(x)), &ms.map(|&x| u32::from(x)))
        .context("M_R and M_S do not multiply")?;
    println!("Path counts M_R · M_S:\n{}", matrix_table(&counts));
    let via_matrix = compose_via_matrix(&r, &s).context("M_R and M_S do not multiply")?;
    println!("M_R ⊙ M_S:\n{}", matrix_table(&via_matrix.to_matrix()));
    ensure!(via_matrix == rs, "matrix composition disagrees with direct composition");
    println!("Decoding M_R ⊙ M_S gives R ∘ S.");

    if let Some((i, j)) = args.cell {
        let mut highlight = PathHighlight::new(r, s)?;
        highlight.select(i - 1, j - 1)?;
        println!("\nCell ({i},{j}):");
        for c in highlight.candidates() {
            let mark = if c.completes() { "✓" } else { "✗" };
            println!(
                "  {mark} {i}→{via}: {} {via}→{j}: {}",
                u8::from(c.left),
                u8::from(c.right),
                via = c.via
            );
        }
    }
    Ok(())
}

fn cmd_animate(settings: &Settings, args: AnimateArgs, rng: &mut ChaCha8Rng) -> anyhow::Result<()> {
    ensure!(args.fps > 0.0, "--fps must be positive");
    ensure!(args.speed > 0.0, "--speed must be positive");

    let g = override_generator(settings.composition, args.size, None, None)?;
    let (r, s) = (g.generate(rng), g.generate(rng));
    println!("{}", set_notation("R", &r));
    println!("{}", set_notation("S", &s));

    let timeline = settings.timeline;
    let board = Storyboard::with_timeline(r, s, timeline)
        .context("R and S must be relations on the same set")?;
    let mut animation = Animation::new(timeline);

    // The animation sees a clock running `speed` times faster than the wall clock.
    let start = Instant::now();
    let clock = |now: Instant| start + now.duration_since(start).mul_f64(args.speed);
    let interval = Duration::from_secs_f64(1.0 / args.fps);

    animation.trigger(start);
    let mut last = None;
    loop {
        let now = clock(Instant::now());
        let running = animation.tick(now);
        let phase = timeline.phase(now.duration_since(start));
        if last != Some(phase) {
            let frame = board.frame(animation.progress());
            println!(
                "{:<8} {:<24} progress {:.2}  edges {:>2}  bridges {:>2}  middle {:.2}",
                format!("{phase:?}"),
                frame.stage.label(),
                frame.progress,
                frame.edges.len(),
                frame.bridges.len(),
                frame.middle.opacity,
            );
            last = Some(phase);
        }
        if !running {
            break;
        }
        std::thread::sleep(interval);
    }

    println!("{}", set_notation("R ∘ S", board.composite()));
    Ok(())
}

fn cmd_practice(
    settings: &Settings,
    args: PracticeArgs,
    rng: &mut ChaCha8Rng,
) -> anyhow::Result<()> {
    let mut config = settings.practice.clone();
    if let Some(count) = args.count {
        config.kinds = Kind::ALL.iter().copied().cycle().take(count).collect();
    }
    let set = QuestionSet::generate(rng, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        for q in &set.questions {
            println!("{q}\n");
        }
    }
    Ok(())
}
