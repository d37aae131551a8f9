use clap::{CommandFactory, Parser};
use expsolver::{
    expression::Expression,
    util::{
        num::{to_bit_pattern, truncate_to_int},
        radix::{to_binary, to_hex},
    },
};
use tracing::Level;

/// expsolver solves normal expressions, like '4+5*3/7'.
///
/// Prefixes supported: '%' for binary, '$' or 'x' for hex.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Groups the binary output in nibbles.
    #[arg(short, long)]
    grouped: bool,

    /// Prints the parsed tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// Logs diagnostics at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to solve. Quote it to keep the shell away from '<', '>'
    /// and '*'.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .with_writer(std::io::stderr)
                             .init();

    let [source] = args.expression.as_slice() else {
        if let Err(e) = Args::command().print_help() {
            eprintln!("{e}");
        }
        return;
    };

    let mut expression = Expression::new(source);
    if let Err(e) = expression.try_prepare() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if args.tree
       && let Some(tree) = expression.tree()
    {
        println!("{tree}");
    }

    let value = truncate_to_int(expression.evaluate());
    let bits = to_bit_pattern(value);
    println!("{value}, 0x{}, %{}", to_hex(bits), to_binary(bits, args.grouped));
}
