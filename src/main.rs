
use lifo_expr::expr::{self, BracketPolicy, BracketValidator, ExprError};
use lifo_expr::expr::source::column_of;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lifo-expr")]
#[command(about = "Stack-based expression tools")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Check that the brackets in an expression are balanced
  Balanced {
    expression: String,
    /// Treat any non-bracket character as unbalanced
    #[arg(long)]
    strict: bool,
  },
  /// Convert an infix expression to postfix
  Postfix {
    expression: String,
  },
  /// Evaluate a postfix expression of single digits
  Eval {
    expression: String,
    /// Use floating-point arithmetic instead of integers
    #[arg(long)]
    float: bool,
  },
  /// Insert the missing left parentheses into an expression
  Reconstruct {
    expression: String,
  },
  /// Evaluate a fully parenthesized infix expression
  Calculate {
    expression: String,
  },
  /// Print the sample conversions
  Demo,
}

const DEMO_BRACKETS: [&str; 3] = ["[()]{}", "{[()]()", "[(]{}"];
const DEMO_INFIX: [&str; 3] = ["A + B * C + D", "(A + B) * C - D", "((1 + 2) - 3 * (8 / 4)) + 5"];
const DEMO_POSTFIX: [&str; 3] = ["12+", "12+3-", "12+3-5+"];
const DEMO_RECONSTRUCT: [&str; 2] = ["1+2)*3-4)*5-6)))", "1+2)*3-4)*(5-6)))"];

fn init_tracing() {
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(env_filter)
    .init();
}

fn main() -> anyhow::Result<()> {
  init_tracing();
  let cli = Cli::parse();
  match cli.command {
    Commands::Balanced { expression, strict } => {
      let policy = if strict { BracketPolicy::RejectOthers } else { BracketPolicy::IgnoreOthers };
      let validator = BracketValidator::new(policy);
      match validator.find_imbalance(&expression) {
        None => println!("balanced"),
        Some(position) => println!("unbalanced at position {}", position),
      }
    }
    Commands::Postfix { expression } => {
      let postfix = pointing_at_error(expr::to_postfix(&expression), &expression)
        .with_context(|| format!("could not convert {:?}", expression))?;
      println!("{}", postfix);
    }
    Commands::Eval { expression, float } => {
      let context = || format!("could not evaluate {:?}", expression);
      if float {
        println!("{}", pointing_at_error(expr::evaluate_float(&expression), &expression).with_context(context)?);
      } else {
        println!("{}", pointing_at_error(expr::evaluate(&expression), &expression).with_context(context)?);
      }
    }
    Commands::Reconstruct { expression } => {
      let infix = pointing_at_error(expr::reconstruct(&expression), &expression)
        .with_context(|| format!("could not reconstruct {:?}", expression))?;
      println!("{}", infix);
    }
    Commands::Calculate { expression } => {
      let value = pointing_at_error(expr::calculate(&expression), &expression)
        .with_context(|| format!("could not calculate {:?}", expression))?;
      println!("{}", value);
    }
    Commands::Demo => {
      println!("{}", demo()?);
    }
  }
  Ok(())
}

/// Attaches a caret line under `expression` marking where the error
/// was detected.
fn pointing_at_error<T>(result: Result<T, ExprError>, expression: &str) -> anyhow::Result<T> {
  result.map_err(|err| {
    let column = column_of(expression, err.position());
    let marker = format!("{}\n{}^", expression, " ".repeat(column));
    anyhow::Error::new(err).context(marker)
  })
}

fn demo() -> anyhow::Result<String> {
  let mut lines = Vec::new();
  for expression in DEMO_BRACKETS {
    lines.push(format!("is_balanced({:?}) = {}", expression, expr::is_balanced(expression)));
  }
  for expression in DEMO_INFIX {
    lines.push(format!("to_postfix({:?}) = {:?}", expression, expr::to_postfix(expression)?));
  }
  for expression in DEMO_POSTFIX {
    lines.push(format!("evaluate({:?}) = {}", expression, expr::evaluate(expression)?));
  }
  for expression in DEMO_RECONSTRUCT {
    lines.push(format!("reconstruct({:?}) = {:?}", expression, expr::reconstruct(expression)?));
  }
  Ok(lines.into_iter().join("\n"))
}
