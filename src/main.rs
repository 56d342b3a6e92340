use parsnip::grammar::languages;
use parsnip::parser::Parser;

const DEMO_INPUTS: [&str; 3] = ["{Python,Haskell,JS}", "{Haskell}", "{JS}"];

/// Parse brace-delimited lists of language names
#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Cli {
    /// Require every input to be consumed completely
    #[arg(long)]
    complete: bool,

    /// Inputs to parse, e.g. '{Python,JS}'. Runs a few samples when empty.
    inputs: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = <Cli as clap::Parser>::parse();
    let grammar = languages();

    let inputs: Vec<&str> = if cli.inputs.is_empty() {
        DEMO_INPUTS.to_vec()
    } else {
        cli.inputs.iter().map(String::as_str).collect()
    };

    let mut failures = 0;
    for input in &inputs {
        let result = if cli.complete {
            grammar.parse_complete(input)
        } else {
            grammar.parse(input)
        };

        match result {
            Ok(parsed) => println!("ok: {:?} (position {})", parsed.value, parsed.position),
            Err(err) => {
                failures += 1;
                println!("error: {err}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs failed to parse", inputs.len());
    }

    Ok(())
}
