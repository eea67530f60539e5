use clap::Parser;
use quadra::{integrate_simpson, integrate_trapezoid};

/// quadra estimates distance traveled from a velocity expression v(t) by
/// numerical integration, using both the composite trapezoidal rule and
/// composite Simpson's 1/3 rule.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The velocity expression to integrate, in the variable `t` (or `x`).
    #[arg(default_value = "3*t**2 + 2*t")]
    expression: String,

    /// Lower bound of the integration interval.
    #[arg(short = 'a', long, default_value_t = 0.0, allow_hyphen_values = true)]
    start: f64,

    /// Upper bound of the integration interval.
    #[arg(short = 'b', long, default_value_t = 10.0, allow_hyphen_values = true)]
    end: f64,

    /// Number of segments to divide the interval into.
    #[arg(short = 'n', long, default_value_t = 20)]
    segments: usize,
}

fn main() {
    let args = Args::parse();

    let trapezoid = integrate_trapezoid(&args.expression, args.start, args.end, args.segments)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
    let simpson = integrate_simpson(&args.expression, args.start, args.end, args.segments)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });

    println!("v(t) = {} over [{}, {}]", args.expression, args.start, args.end);
    println!("trapezoid (n = {}): {:.4}", trapezoid.segments_used, trapezoid.estimate);
    println!("simpson   (n = {}): {:.4}", simpson.segments_used, simpson.estimate);
}
