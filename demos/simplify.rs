use clap::{Parser, ValueEnum};

use kmap_rs::clause::{render_all_clauses, render_group};
use kmap_rs::display::CellFormat;
use kmap_rs::finder::find_adjacency_groups;
use kmap_rs::kmap::KarnaughMap;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Mode {
    Dec,
    Bin,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of variables (2 to 6).
    #[arg(short, long, value_name = "INT", default_value = "4")]
    vars: u32,

    /// Truth-table rows where the function is true.
    #[arg(value_name = "MINTERM")]
    minterms: Vec<u32>,

    /// How cell values are displayed.
    #[arg(long, value_enum, default_value = "dec")]
    mode: Mode,

    /// Enable debug logging of the group search.
    #[arg(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let map = KarnaughMap::from_minterms(args.vars, args.minterms.iter().copied())?;
    println!("map = {:?}", map);

    let format = match args.mode {
        Mode::Dec => CellFormat::Decimal,
        Mode::Bin => CellFormat::Binary,
    };
    println!();
    println!("{}", map.to_table_string(format));
    println!();

    println!("Clauses:");
    for clause in render_all_clauses(&map) {
        println!("- {}", clause);
    }

    let time_groups = std::time::Instant::now();
    let groups = find_adjacency_groups(&map);
    let time_groups = time_groups.elapsed();

    println!("Groups ({} in {:.3}s):", groups.len(), time_groups.as_secs_f64());
    for group in &groups {
        println!("- {} = {}", render_group(&map, group), group);
    }

    Ok(())
}
