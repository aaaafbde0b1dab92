use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use keepsake::{CollagePlan, GreetingSession, Rect, ScrollTriggers};

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a greeting content JSON and print a summary.
    Validate(ValidateArgs),
    /// Simulate a scroll pass over a synthetic collage layout and print the
    /// timeline's domain/reveal progression.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input greeting JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input greeting JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Collage container top edge, in document pixels.
    #[arg(long, default_value_t = 1200.0)]
    container_top: f64,

    /// Collage container width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    container_width: f64,

    /// Collage container height in pixels.
    #[arg(long, default_value_t = 2400.0)]
    container_height: f64,

    /// Number of scroll samples across the trigger window.
    #[arg(long, default_value_t = 9)]
    steps: usize,

    /// Also print the computed SVG path description.
    #[arg(long)]
    dump_path: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn read_greeting_json(path: &Path) -> anyhow::Result<keepsake::Greeting> {
    let f = File::open(path).with_context(|| format!("open greeting '{}'", path.display()))?;
    let r = BufReader::new(f);
    let greeting: keepsake::Greeting =
        serde_json::from_reader(r).with_context(|| "parse greeting JSON")?;
    Ok(greeting)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let greeting = read_greeting_json(&args.in_path)?;
    greeting.validate()?;

    println!("greeting for {} from {}", greeting.recipient, greeting.sender);
    println!("  memories:        {}", greeting.memories.len());
    println!("  love notes:      {}", greeting.love_notes.len());
    println!("  promises:        {}", greeting.promises.len());
    println!("  important dates: {}", greeting.important_dates.len());
    println!("  journey steps:   {}", greeting.journey.steps.len());

    eprintln!("ok {}", args.in_path.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps < 2 {
        anyhow::bail!("--steps must be at least 2");
    }

    let greeting = read_greeting_json(&args.in_path)?;
    let mut session = GreetingSession::new(greeting)?;

    let container = Rect::new(
        0.0,
        args.container_top,
        args.container_width,
        args.container_top + args.container_height,
    );
    let plan = CollagePlan::new(container);

    // Fast-forward the settle schedule; the synthetic plan is always
    // measurable so one pass would do, the rest are no-ops.
    session.tick(Duration::from_secs(2), &plan);

    let span = ScrollTriggers::default().span(container.y0, container.y1, args.viewport_height);
    println!(
        "trigger window: scroll {:.1} .. {:.1} (viewport {:.0}px)",
        span.start, span.end, args.viewport_height
    );
    println!("{:>10}  {:>8}  {:>8}  {:>10}", "scroll", "domain", "reveal", "drawn px");

    let len = span.end - span.start;
    for i in 0..args.steps {
        let scroll = span.start + len * (i as f64) / (args.steps - 1) as f64;
        let domain = span.progress_at(scroll);
        let reveal = session.timeline.observe_scroll(domain);
        println!(
            "{:>10.1}  {:>8.3}  {:>8.3}  {:>10.1}",
            scroll,
            domain,
            reveal,
            session.timeline.drawn_length(0.1)
        );
    }

    if args.dump_path {
        println!("path: {}", session.timeline.path_svg());
    }

    eprintln!(
        "swept {} samples over {} segments",
        args.steps,
        session.timeline.segment_count()
    );
    Ok(())
}
