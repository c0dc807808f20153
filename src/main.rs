use buchberger::{
    groebner, reduce_groebner_basis, reduced_groebner, CoefficientField, MonomialOrder,
    Polynomial, Ring,
};
use chrono::Local;
use clap::{ArgAction, Parser};
use num_bigint::BigInt;
use std::{
    cmp::Ordering,
    error::Error,
    fs::{self, File},
    io::{self, Write},
    path::Path,
    time::Instant,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// File with a `Defining x, y, z` line and a `[f1, f2, ...]` line
    #[arg(short, long)]
    input: String,

    /// Where to write the basis, one polynomial per line; stdout if absent
    #[arg(short, long)]
    output: Option<String>,

    /// Coefficient field: `QQ` or a prime `p` for GF(p)
    #[arg(short, long, default_value = "QQ", value_parser = parse_field)]
    field: CoefficientField,

    /// Monomial order: `grlex` or `lex`
    #[arg(long, default_value_t = MonomialOrder::GradedLex)]
    order: MonomialOrder,

    /// Emit the reduced Gröbner basis
    #[arg(short, long)]
    reduced: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_field(text: &str) -> Result<CoefficientField, String> {
    if text.eq_ignore_ascii_case("qq") {
        return Ok(CoefficientField::Rational);
    }
    let modulus = text
        .parse::<BigInt>()
        .map_err(|e| format!("expected `QQ` or a prime, got {:?}: {}", text, e))?;
    CoefficientField::prime(modulus).map_err(|e| e.to_string())
}

/// Splits the input into variable names and the bracketed generator list.
fn parse_input(text: &str) -> Result<(Vec<String>, &str), Box<dyn Error>> {
    let mut vars = None;
    let mut polynomials = None;

    for line in text.lines().map(str::trim) {
        if let Some(names) = line.strip_prefix("Defining") {
            vars = Some(names.split(',').map(|s| s.trim().to_owned()).collect());
        } else if line.starts_with('[') && line.ends_with(']') {
            polynomials = Some(line);
        } else if !line.is_empty() {
            return Err(format!("unexpected input line {:?}", line).into());
        }
    }

    match (vars, polynomials) {
        (Some(vars), Some(polynomials)) => Ok((vars, polynomials)),
        (None, _) => Err("missing `Defining` line".into()),
        (_, None) => Err("missing `[...]` generator line".into()),
    }
}

fn ideal_tostring(ideal: &[Polynomial]) -> String {
    ideal
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn compute(generators: &[Polynomial], reduced: bool) -> buchberger::Result<Vec<Polynomial>> {
    if !reduced {
        return groebner(generators);
    }
    let mut sorted: Vec<Polynomial> = generators
        .iter()
        .filter(|p| !p.is_zero())
        .cloned()
        .collect();
    sorted.sort_by(|f, g| g.cmp_leading(f));
    if sorted
        .windows(2)
        .all(|w| w[0].cmp_leading(&w[1]) == Ordering::Greater)
    {
        reduced_groebner(&sorted)
    } else {
        reduce_groebner_basis(&groebner(generators)?)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();

    let text = fs::read_to_string(Path::new(&args.input))?;
    let (vars, polynomials) = parse_input(&text)?;
    let ring = Ring::new(args.field, vars, args.order)?;
    let generators = ring.parse_list(polynomials)?;
    tracing::info!(ring = %ring, generators = generators.len(), "input read");

    println!(
        "{} Computation start",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let start_time = Instant::now();

    let basis = compute(&generators, args.reduced)?;

    println!(
        "{} Computation end, total time {:.3} seconds",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        start_time.elapsed().as_secs_f64()
    );

    let mut rendered = ideal_tostring(&basis);
    rendered.push('\n');
    match args.output {
        Some(path) => {
            let mut output = File::create(Path::new(&path))?;
            output.write_all(rendered.as_bytes())?;
            output.flush()?;
        },
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
